//! Offline word-list outfit generator.
//!
//! No provider call; uniform random selection from small fixed word lists,
//! keyed by parsed temperature and mood. Takes an explicit random source so
//! callers can seed it deterministically.

use crate::request::OutfitRequest;
use rand::Rng;

const WARM_TOPS: &[&str] = &["light blouse", "flowy top", "short-sleeve crop tee"];
const COOL_TOPS: &[&str] = &["cozy sweater", "long-sleeve turtleneck", "denim jacket over a tee"];
const WARM_BOTTOMS: &[&str] = &["high-waisted shorts", "midi skirt", "linen pants"];
const COOL_BOTTOMS: &[&str] = &["jeans", "leather pants", "maxi skirt"];
const CASUAL_SHOES: &[&str] = &["white sneakers", "ankle boots", "cute flats"];
const DRESSY_SHOES: &[&str] = &["block heels", "strappy sandals", "loafers"];
const ACCESSORIES: &[&str] = &[
    "gold hoops",
    "tote bag",
    "crossbody purse",
    "statement necklace",
    "stacked rings",
];

/// Above this temperature the warm lists apply.
const WARM_THRESHOLD_F: f32 = 68.0;

/// Generate an outfit recommendation without a completion provider.
pub fn offline_outfit<R: Rng + ?Sized>(request: &OutfitRequest, rng: &mut R) -> String {
    let warm = parse_fahrenheit(&request.weather).is_some_and(|degrees| degrees > WARM_THRESHOLD_F);
    let (tops, bottoms) = if warm {
        (WARM_TOPS, WARM_BOTTOMS)
    } else {
        (COOL_TOPS, COOL_BOTTOMS)
    };
    let shoes = if request.mood.to_lowercase().contains("casual") {
        CASUAL_SHOES
    } else {
        DRESSY_SHOES
    };

    let top = pick(rng, tops);
    let bottom = pick(rng, bottoms);
    let shoes = pick(rng, shoes);
    let accessory = pick(rng, ACCESSORIES);

    format!(
        "For a {} when it's around {}, go for a {top} with {bottom}, \
pair it with {shoes}, and add {accessory} to complete the look. \
Since you're feeling {}, try adding your personal touch, \
maybe a pop of color or bold makeup!",
        request.event.to_lowercase(),
        request.weather,
        request.mood.to_lowercase()
    )
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Extract the leading temperature from inputs like `"70°F"` or `"around 55F"`.
/// Unparseable weather falls back to the cool lists.
fn parse_fahrenheit(weather: &str) -> Option<f32> {
    let start = weather.find(|c: char| c.is_ascii_digit() || c == '-')?;
    let rest = &weather[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.' && *c != '-')
        .map(|(index, _)| index)
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{offline_outfit, parse_fahrenheit};
    use crate::request::OutfitRequest;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn request(weather: &str, mood: &str) -> OutfitRequest {
        OutfitRequest {
            event: "Dinner with Friends".to_string(),
            weather: weather.to_string(),
            mood: mood.to_string(),
            context: None,
            user_id: None,
        }
    }

    #[test]
    fn parses_common_weather_shapes() {
        assert_eq!(parse_fahrenheit("70°F"), Some(70.0));
        assert_eq!(parse_fahrenheit("around 55F"), Some(55.0));
        assert_eq!(parse_fahrenheit("-5°F and windy"), Some(-5.0));
        assert_eq!(parse_fahrenheit("chilly"), None);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let req = request("70°F", "confident");
        assert_eq!(offline_outfit(&req, &mut a), offline_outfit(&req, &mut b));
    }

    #[test]
    fn warm_weather_selects_warm_lists() {
        let mut rng = StdRng::seed_from_u64(1);
        let outfit = offline_outfit(&request("85°F", "confident"), &mut rng);
        let warm_pieces = [
            "light blouse",
            "flowy top",
            "short-sleeve crop tee",
            "high-waisted shorts",
            "midi skirt",
            "linen pants",
        ];
        assert!(warm_pieces.iter().any(|piece| outfit.contains(piece)));
    }

    #[test]
    fn cool_or_unparseable_weather_selects_cool_lists() {
        let cool_tops = ["cozy sweater", "long-sleeve turtleneck", "denim jacket over a tee"];
        for weather in ["40°F", "chilly"] {
            let mut rng = StdRng::seed_from_u64(2);
            let outfit = offline_outfit(&request(weather, "confident"), &mut rng);
            assert!(cool_tops.iter().any(|piece| outfit.contains(piece)), "{weather}: {outfit}");
        }
    }

    #[test]
    fn mood_selects_shoe_register_and_is_embedded() {
        let mut rng = StdRng::seed_from_u64(3);
        let casual = offline_outfit(&request("70°F", "Casual and relaxed"), &mut rng);
        let casual_shoes = ["white sneakers", "ankle boots", "cute flats"];
        assert!(casual_shoes.iter().any(|piece| casual.contains(piece)));
        assert!(casual.contains("dinner with friends"));
        assert!(casual.contains("70°F"));
        assert!(casual.contains("casual and relaxed"));

        let mut rng = StdRng::seed_from_u64(3);
        let dressy = offline_outfit(&request("70°F", "confident"), &mut rng);
        let dressy_shoes = ["block heels", "strappy sandals", "loafers"];
        assert!(dressy_shoes.iter().any(|piece| dressy.contains(piece)));
    }
}
