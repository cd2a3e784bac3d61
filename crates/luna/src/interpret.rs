//! Canned interpretation text.
//!
//! Every lookup is total: keys without a dedicated text fall through to a default.

use crate::zodiac::{Body, Sign};

pub fn sun_message(sign: Sign) -> &'static str {
    match sign {
        Sign::Gemini => concat!(
            "あなたは『知識をつなぐ魂』。\n",
            "好奇心と観察力で世界を読み解き、人と人・過去と未来を結ぶ存在です。\n",
            "学び・言葉・探究は、あなたの宿命であり才能です。"
        ),
        _ => "あなたの太陽は、あなたらしい生き方と使命を示しています。",
    }
}

pub fn moon_message(sign: Sign) -> &'static str {
    match sign {
        Sign::Taurus => concat!(
            "あなたの心は『安定・美・心地よさ』を強く求めます。\n",
            "本物の美、安心できる場所、あたたかい人間関係があなたを整えます。"
        ),
        _ => "あなたの心はとても繊細で豊か。安心できる環境が才能を引き出します。",
    }
}

/// Empty for the luminaries; callers skip empty messages.
pub fn planet_message(body: Body) -> &'static str {
    match body {
        Body::Mercury => "思考・言葉・学び方を表します。",
        Body::Venus => "愛情表現・美意識・人間関係の心地よさを表します。",
        Body::Mars => "行動力・やる気・怒り方のクセを表します。",
        Body::Jupiter => "拡大・チャンス・どこで運が広がるかを示します。",
        Body::Saturn => "課題・責任・乗り越えると大きな力になるポイントです。",
        Body::Uranus => "個性・革命・人と違う部分の輝きです。",
        Body::Neptune => "直感・夢・スピリチュアルな感性を表します。",
        Body::Pluto => "魂レベルの変容・大きな転機を表します。",
        Body::Sun | Body::Moon => "",
    }
}

fn house_domain(house_number: u8) -> &'static str {
    match house_number {
        1 => "自分自身・性格・第一印象の領域です。",
        2 => "お金・才能・所有・価値観の領域です。",
        3 => "学び・コミュニケーション・兄弟姉妹の領域です。",
        4 => "家・家族・ルーツ・安心できる場所の領域です。",
        5 => "恋愛・創造性・趣味・自己表現の領域です。",
        6 => "仕事・健康・日々の習慣の領域です。",
        7 => "パートナーシップ・契約・対人関係の領域です。",
        8 => "心の深い結びつき・共有資産・変容の領域です。",
        9 => "哲学・専門的学び・海外・精神性の領域です。",
        10 => "社会的地位・キャリア・使命の領域です。",
        11 => "仲間・コミュニティ・未来のビジョンの領域です。",
        12 => "潜在意識・癒し・見えない世界の領域です。",
        _ => "",
    }
}

pub fn house_message(house_number: u8, sign: Sign) -> String {
    format!("{}ハウス（{}）：{}", house_number, sign.name_ja(), house_domain(house_number))
}

/// Compare a natal and a transit placement by their formatted text.
///
/// Two placements in the same sign with different degree strings count as different.
pub fn simple_compare(natal_text: &str, transit_text: &str, label: &str) -> String {
    if natal_text == transit_text {
        format!(
            "{}はネイタル・トランジットともに『{}』。\n自分らしさと、その日の流れが重なりやすい配置です。",
            label, natal_text
        )
    } else {
        format!(
            "{}のネイタルは『{}』、トランジットは『{}』。\nふだんの傾向に、期間限定で別のテーマが重なっているタイミングです。",
            label, natal_text, transit_text
        )
    }
}
