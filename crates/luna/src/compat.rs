//! Sun-sign element compatibility.

use serde::{Deserialize, Serialize};

use crate::zodiac::{Element, Sign};

/// Outcome buckets, listed in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBucket {
    SameElement,
    FireAir,
    EarthWater,
    FireWater,
    AirEarth,
    Different,
}

impl CompatibilityBucket {
    pub const ALL: [CompatibilityBucket; 6] = [
        CompatibilityBucket::SameElement,
        CompatibilityBucket::FireAir,
        CompatibilityBucket::EarthWater,
        CompatibilityBucket::FireWater,
        CompatibilityBucket::AirEarth,
        CompatibilityBucket::Different,
    ];

    pub fn message(self) -> &'static str {
        match self {
            CompatibilityBucket::SameElement => {
                "同じエレメント同士。基本的な感覚やテンポが似ていて、自然体でいられる相性です。"
            }
            CompatibilityBucket::FireAir => {
                "火と風の組み合わせ。勢いとアイデアが噛み合う、刺激的で前向きな相性です。"
            }
            CompatibilityBucket::EarthWater => {
                "地と水の組み合わせ。安心感や現実性、情の深さを育てやすい、落ち着いた相性です。"
            }
            CompatibilityBucket::FireWater => {
                "火と水の組み合わせ。情熱と感情が揺れやすく、ドラマチックになりやすい相性です。"
            }
            CompatibilityBucket::AirEarth => {
                "風と地の組み合わせ。考え方と現実感覚がすれ違いやすい分、お互いを補い合える相性です。"
            }
            CompatibilityBucket::Different => {
                "違うタイプ同士。最初は「違い」を感じますが、理解し合えれば学び合う関係になれます。"
            }
        }
    }
}

fn is_pair(e1: Element, e2: Element, a: Element, b: Element) -> bool {
    (e1 == a && e2 == b) || (e1 == b && e2 == a)
}

/// First matching rule wins.
pub fn classify_elements(e1: Element, e2: Element) -> CompatibilityBucket {
    use Element::*;

    if e1 == e2 {
        CompatibilityBucket::SameElement
    } else if is_pair(e1, e2, Fire, Air) {
        CompatibilityBucket::FireAir
    } else if is_pair(e1, e2, Earth, Water) {
        CompatibilityBucket::EarthWater
    } else if is_pair(e1, e2, Fire, Water) {
        CompatibilityBucket::FireWater
    } else if is_pair(e1, e2, Air, Earth) {
        CompatibilityBucket::AirEarth
    } else {
        CompatibilityBucket::Different
    }
}

pub fn compatibility_bucket(sun1: Sign, sun2: Sign) -> CompatibilityBucket {
    classify_elements(sun1.element(), sun2.element())
}

pub fn compatibility(
    sun1: Sign,
    sun2: Sign,
    moon1: Sign,
    moon2: Sign,
    name1: &str,
    name2: &str,
) -> String {
    let bucket = compatibility_bucket(sun1, sun2);
    format!(
        "{name1}（太陽{sun1}）と{name2}（太陽{sun2}）の関係性は、\n{msg}\n\n\
         月の組み合わせとしては、{name1}の月は{moon1}、{name2}の月は{moon2}。\n\
         感情面・安心感のポイントを大切にすると、関係性がより穏やかになります。",
        name1 = name1,
        name2 = name2,
        sun1 = sun1.name_ja(),
        sun2 = sun2.name_ja(),
        moon1 = moon1.name_ja(),
        moon2 = moon2.name_ja(),
        msg = bucket.message(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_earth_and_water_air_are_different() {
        assert_eq!(
            classify_elements(Element::Fire, Element::Earth),
            CompatibilityBucket::Different
        );
        assert_eq!(
            classify_elements(Element::Water, Element::Air),
            CompatibilityBucket::Different
        );
    }

    #[test]
    fn test_message_mentions_both_moons() {
        let text = compatibility(Sign::Aries, Sign::Gemini, Sign::Cancer, Sign::Pisces, "Luna", "Sol");
        assert!(text.starts_with("Luna（太陽牡羊座）とSol（太陽双子座）の関係性は、"));
        assert!(text.contains(CompatibilityBucket::FireAir.message()));
        assert!(text.contains("Lunaの月は蟹座、Solの月は魚座"));
    }
}
