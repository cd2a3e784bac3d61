use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: &'static str,
    pub message: &'static str,
}

pub static CARDS: [Card; 6] = [
    Card {
        name: "星",
        message: "希望・インスピレーション・『私ならできる』という感覚。",
    },
    Card {
        name: "女教皇",
        message: "直感・知恵・静かな洞察。心の声を聴くタイミングです。",
    },
    Card {
        name: "運命の輪",
        message: "流れが変わるタイミング。新しいチャンスが巡ってきます。",
    },
    Card {
        name: "世界",
        message: "ひとつのサイクルの完成。次のステージへの準備が整っています。",
    },
    Card {
        name: "月",
        message: "感情の揺れや不安。けれど、その奥に本音や本当の望みがあります。",
    },
    Card {
        name: "太陽",
        message: "成功・喜び・祝福。自分を信じて進んで大丈夫な時期です。",
    },
];

/// Draw one card uniformly at random.
pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> &'static Card {
    &CARDS[rng.gen_range(0..CARDS.len())]
}
