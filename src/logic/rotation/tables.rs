//! Static agronomic knowledge used by the rotation strategies. Ordered
//! slices rather than hash sets so generated options come out in a stable
//! order.

use crate::models::CropFamily;

/// Deep-rooted crops for nutrient cycling (access deeper soil nutrients).
pub const DEEP_ROOTED_CROPS: [&str; 12] = [
    "Sunflower",
    "Sorghum",
    "Cotton",
    "Carrot",
    "Onion",
    "Tomato",
    "Maize",
    "Pigeon Pea",
    "Redgram",
    "Soybean",
    "Sesame",
    "Safflower",
];

/// Shallow-rooted crops (deplete topsoil nutrients).
pub const SHALLOW_ROOTED_CROPS: [&str; 12] = [
    "Cabbage",
    "Cauliflower",
    "Broccoli",
    "Mustard",
    "Radish",
    "Lettuce",
    "Spinach",
    "Cucumber",
    "Bottle Gourd",
    "Watermelon",
    "Wheat",
    "Rice",
];

/// Legume crops for nitrogen fixation.
pub const LEGUME_CROPS: [&str; 12] = [
    "Greengram",
    "Blackgram",
    "Redgram",
    "Chickpea",
    "Lentil",
    "Peas",
    "Soybean",
    "Groundnut",
    "Cowpea",
    "Horsegram",
    "Mothbean",
    "Berseem",
];

/// Crops suited to diversifying a rice-based system on residual moisture.
pub const RICE_DIVERSIFICATION_CROPS: [&str; 12] = [
    "Greengram",
    "Blackgram",
    "Lentil",
    "Chickpea",
    "Mustard",
    "Sunflower",
    "Sesame",
    "Groundnut",
    "Wheat",
    "Barley",
    "Oat",
    "Rapeseed",
];

/// Relay cropping pairs: main crop to candidate relay crops sown into the
/// maturing stand (paira/utera for rice).
pub const RELAY_CROP_PAIRS: [(&str, &[&str]); 4] = [
    ("Rice", &["Lentil", "Chickpea", "Greengram", "Blackgram"]),
    ("Paddy", &["Lentil", "Chickpea", "Greengram", "Blackgram"]),
    ("Wheat", &["Chickpea", "Lentil", "Mustard"]),
    ("Maize", &["Cowpea", "Greengram", "Soybean"]),
];

/// Intercropping partners by main crop.
pub const INTERCROP_PAIRS: [(&str, &[&str]); 5] = [
    ("Rice", &["Soybean", "Greengram", "Blackgram"]),
    ("Maize", &["Cowpea", "Greengram", "Soybean", "Beans"]),
    ("Wheat", &["Chickpea", "Lentil", "Mustard"]),
    ("Cotton", &["Greengram", "Blackgram", "Soybean"]),
    ("Sugarcane", &["Soybean", "Greengram", "Potato", "Onion"]),
];

/// Pests and diseases known to carry over from specific crops.
pub const CROP_PEST_RISK: [(&str, &[&str]); 6] = [
    (
        "Rice",
        &["Blast", "Bacterial Leaf Blight", "Brown Planthopper", "Stem Rot"],
    ),
    ("Wheat", &["Rust", "Karnal Bunt", "Powdery Mildew", "Aphids"]),
    (
        "Cotton",
        &["Pink Bollworm", "Whitefly", "Leaf Curl Virus", "Wilt"],
    ),
    ("Sugarcane", &["Top Borer", "Pyrilla", "Red Rot", "Smut"]),
    ("Groundnut", &["Leaf Spot", "Rust", "Aflatoxin", "Termites"]),
    (
        "Soybean",
        &["Yellow Mosaic", "Stem Fly", "Girdle Beetle", "Rust"],
    ),
];

/// Families whose pests carry over into a following crop of the same family.
pub const PEST_CARRYOVER_FAMILIES: [CropFamily; 5] = [
    CropFamily::Cereals,
    CropFamily::Legumes,
    CropFamily::Brassicas,
    CropFamily::Solanaceous,
    CropFamily::Cucurbits,
];

/// Relay partners for a main crop, if any.
pub fn relay_partners(main_crop: &str) -> Option<&'static [&'static str]> {
    RELAY_CROP_PAIRS
        .iter()
        .find(|(crop, _)| crop.eq_ignore_ascii_case(main_crop))
        .map(|(_, partners)| *partners)
}

/// Intercropping partners for a main crop.
pub fn intercrop_partners(main_crop: &str) -> &'static [&'static str] {
    INTERCROP_PAIRS
        .iter()
        .find(|(crop, _)| crop.eq_ignore_ascii_case(main_crop))
        .map(|(_, partners)| *partners)
        .unwrap_or(&[])
}

/// Known carryover pests for a crop.
pub fn known_pests(crop: &str) -> Option<&'static [&'static str]> {
    CROP_PEST_RISK
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(crop))
        .map(|(_, pests)| *pests)
}

/// Whether the family's pests persist into a following same-family crop.
pub fn has_family_carryover(family: CropFamily) -> bool {
    PEST_CARRYOVER_FAMILIES.contains(&family)
}

/// Rice and paddy are the same cropping system under two names.
pub fn is_rice_crop(crop: &str) -> bool {
    crop.eq_ignore_ascii_case("Rice") || crop.eq_ignore_ascii_case("Paddy")
}
