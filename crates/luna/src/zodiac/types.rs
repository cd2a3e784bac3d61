use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve tropical signs in zodiac order, starting at 0° Aries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign for a sector index; wraps around past Pisces
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Japanese display name used in reading text
    pub fn name_ja(self) -> &'static str {
        match self {
            Sign::Aries => "牡羊座",
            Sign::Taurus => "牡牛座",
            Sign::Gemini => "双子座",
            Sign::Cancer => "蟹座",
            Sign::Leo => "獅子座",
            Sign::Virgo => "乙女座",
            Sign::Libra => "天秤座",
            Sign::Scorpio => "蠍座",
            Sign::Sagittarius => "射手座",
            Sign::Capricorn => "山羊座",
            Sign::Aquarius => "水瓶座",
            Sign::Pisces => "魚座",
        }
    }

    /// English label drawn on the chart wheel
    pub fn label(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_ja())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name_ja(self) -> &'static str {
        match self {
            Element::Fire => "火",
            Element::Earth => "地",
            Element::Air => "風",
            Element::Water => "水",
        }
    }
}

/// Bodies evaluated for every chart, in listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Everything except the two luminaries
    pub const PLANETS: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Slow movers listed in the transit section of a reading
    pub const MAJOR_TRANSITS: [Body; 3] = [Body::Jupiter, Body::Saturn, Body::Pluto];

    pub fn name_ja(self) -> &'static str {
        match self {
            Body::Sun => "太陽",
            Body::Moon => "月",
            Body::Mercury => "水星",
            Body::Venus => "金星",
            Body::Mars => "火星",
            Body::Jupiter => "木星",
            Body::Saturn => "土星",
            Body::Uranus => "天王星",
            Body::Neptune => "海王星",
            Body::Pluto => "冥王星",
        }
    }

    /// Short label drawn next to the chart marker
    pub fn abbreviation(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Me",
            Body::Venus => "Ve",
            Body::Mars => "Ma",
            Body::Jupiter => "Jup",
            Body::Saturn => "Sat",
            Body::Uranus => "Ur",
            Body::Neptune => "Ne",
            Body::Pluto => "Pl",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_ja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_signs_per_element() {
        for element in Element::ALL {
            let count = Sign::ALL.iter().filter(|s| s.element() == element).count();
            assert_eq!(count, 3, "{:?}", element);
        }
    }

    #[test]
    fn test_sign_index_round_trip() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
        assert_eq!(Sign::from_index(12), Sign::Aries);
    }

    #[test]
    fn test_body_order_is_listing_order() {
        let mut sorted = Body::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Body::ALL.to_vec());
        assert_eq!(Body::ALL[0], Body::Sun);
        assert_eq!(Body::ALL[1], Body::Moon);
    }
}
