use serde::{Deserialize, Serialize};

/// Crop family classification for rotation analysis.
///
/// Crops in the same family share similar nutrient requirements and pest
/// profiles, so consecutive plantings from one family deplete the same soil
/// nutrients and let pest populations carry over between seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropFamily {
    Cereals,
    Legumes,
    Brassicas,
    Solanaceous,
    Cucurbits,
    RootTubers,
    Fiber,
    Oilseeds,
    Spices,
    Fruits,
    GreenManure,
    Fodder,
}

/// Root depth classification for nutrient cycling analysis.
///
/// Deep-rooted crops access nutrients from deeper soil layers; shallow-rooted
/// crops deplete the topsoil. Alternating depths spreads uptake across the
/// profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootDepth {
    Shallow,
    Medium,
    Deep,
}

/// All families in declaration order. Lookup and tie-breaking both iterate
/// this slice, which keeps every classification deterministic.
pub const ALL_FAMILIES: [CropFamily; 12] = [
    CropFamily::Cereals,
    CropFamily::Legumes,
    CropFamily::Brassicas,
    CropFamily::Solanaceous,
    CropFamily::Cucurbits,
    CropFamily::RootTubers,
    CropFamily::Fiber,
    CropFamily::Oilseeds,
    CropFamily::Spices,
    CropFamily::Fruits,
    CropFamily::GreenManure,
    CropFamily::Fodder,
];

impl CropFamily {
    pub fn family_name(&self) -> &'static str {
        match self {
            CropFamily::Cereals => "Cereals",
            CropFamily::Legumes => "Legumes",
            CropFamily::Brassicas => "Brassicas",
            CropFamily::Solanaceous => "Solanaceous",
            CropFamily::Cucurbits => "Cucurbits",
            CropFamily::RootTubers => "Root Tubers",
            CropFamily::Fiber => "Fiber",
            CropFamily::Oilseeds => "Oilseeds",
            CropFamily::Spices => "Spices",
            CropFamily::Fruits => "Fruits",
            CropFamily::GreenManure => "Green Manure",
            CropFamily::Fodder => "Fodder",
        }
    }

    /// Crops commonly classified under this family. Matching is exact
    /// (case-insensitive) against these names.
    pub fn common_crops(&self) -> &'static [&'static str] {
        match self {
            CropFamily::Cereals => &[
                "Rice", "Wheat", "Maize", "Barley", "Sorghum", "Millet", "Ragi", "Bajra", "Paddy",
            ],
            CropFamily::Legumes => &[
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
            ],
            CropFamily::Brassicas => &[
                "Cabbage",
                "Cauliflower",
                "Broccoli",
                "Kale",
                "Mustard",
                "Rapeseed",
                "Turnip",
                "Radish",
                "Knol-khol",
            ],
            CropFamily::Solanaceous => {
                &["Tomato", "Potato", "Brinjal", "Chili", "Bell Pepper", "Tobacco"]
            }
            CropFamily::Cucurbits => &[
                "Cucumber",
                "Bottle Gourd",
                "Bitter Gourd",
                "Pumpkin",
                "Squash",
                "Melon",
                "Watermelon",
                "Zucchini",
            ],
            CropFamily::RootTubers => &[
                "Carrot",
                "Beetroot",
                "Onion",
                "Garlic",
                "Sweet Potato",
                "Tapioca",
                "Yam",
            ],
            CropFamily::Fiber => &["Cotton", "Jute", "Mesta", "Sisal", "Hemp"],
            CropFamily::Oilseeds => {
                &["Sunflower", "Sesame", "Niger", "Safflower", "Castor", "Linseed"]
            }
            CropFamily::Spices => &[
                "Coriander",
                "Cumin",
                "Fenugreek",
                "Turmeric",
                "Ginger",
                "Cardamom",
                "Black Pepper",
                "Cinnamon",
                "Cloves",
            ],
            CropFamily::Fruits => &[
                "Mango",
                "Banana",
                "Citrus",
                "Papaya",
                "Guava",
                "Pomegranate",
                "Grapes",
            ],
            CropFamily::GreenManure => {
                &["Sesbania", "Crotalaria", "Sunhemp", "Dhaincha", "Glycine"]
            }
            CropFamily::Fodder => {
                &["Berseem", "Lucerne", "Napier", "Sorghum Fodder", "Maize Fodder"]
            }
        }
    }

    pub fn typical_root_depth(&self) -> RootDepth {
        match self {
            CropFamily::Cereals => RootDepth::Deep,
            CropFamily::Legumes => RootDepth::Medium,
            CropFamily::Brassicas => RootDepth::Shallow,
            CropFamily::Solanaceous => RootDepth::Medium,
            CropFamily::Cucurbits => RootDepth::Shallow,
            CropFamily::RootTubers => RootDepth::Deep,
            CropFamily::Fiber => RootDepth::Deep,
            CropFamily::Oilseeds => RootDepth::Medium,
            CropFamily::Spices => RootDepth::Medium,
            CropFamily::Fruits => RootDepth::Deep,
            CropFamily::GreenManure => RootDepth::Medium,
            CropFamily::Fodder => RootDepth::Shallow,
        }
    }

    /// Soil nutrients most depleted by repeated plantings of this family.
    pub fn affected_nutrients(&self) -> &'static str {
        match self {
            CropFamily::Cereals => "Nitrogen (N), Zinc (Zn)",
            // Legumes fix N but deplete P and K
            CropFamily::Legumes => "Phosphorus (P), Potassium (K)",
            CropFamily::Brassicas => "Potassium (K), Calcium (Ca), Boron (B)",
            CropFamily::Solanaceous => "Phosphorus (P), Calcium (Ca), Magnesium (Mg)",
            CropFamily::Cucurbits => "Nitrogen (N), Potassium (K)",
            CropFamily::RootTubers => "Potassium (K), Phosphorus (P)",
            CropFamily::Fiber => "Nitrogen (N), Potassium (K)",
            CropFamily::Oilseeds => "Sulfur (S), Boron (B)",
            CropFamily::Spices => "Various micronutrients depending on crop",
            _ => "Nitrogen (N), Phosphorus (P), Potassium (K)",
        }
    }

    /// Advice for breaking a monoculture pattern in this family. An URGENT
    /// suffix is appended once the run reaches the critical length.
    pub fn rotation_advice(&self, consecutive_count: usize) -> String {
        let mut advice = String::from(match self {
            CropFamily::Cereals => {
                "Consider rotating with legumes (greengram, blackgram, chickpea) for nitrogen fixation. \
                 Follow with oilseeds (sunflower, sesame) to break pest cycles. "
            }
            CropFamily::Legumes => {
                "After legumes, plant cereals (wheat, rice) to utilize fixed nitrogen. \
                 Include brassicas for diverse nutrient uptake. "
            }
            CropFamily::Brassicas => {
                "Rotate with cereals or root crops to reduce pest pressure. \
                 Add lime if soil pH has dropped due to brassica cultivation. "
            }
            CropFamily::Solanaceous => {
                "Avoid consecutive solanaceous crops to reduce disease buildup. \
                 Rotate with cereals or legumes. "
            }
            CropFamily::Cucurbits => {
                "Rotate with deep-rooted crops (sunflower, maize) to access deeper nutrients. \
                 Avoid consecutive cucurbits to prevent soil-borne diseases. "
            }
            CropFamily::RootTubers => {
                "Follow with cereals to utilize residual potassium. \
                 Add organic matter to replenish soil after root crop harvest. "
            }
            CropFamily::Fiber => {
                "Rotate with legumes to restore nitrogen. \
                 Include green manure crops before next fiber crop. "
            }
            CropFamily::Oilseeds => {
                "Follow oilseeds with cereals for balanced nutrient utilization. \
                 Add sulfur-containing fertilizers if needed. "
            }
            _ => "Introduce crops from different families to restore balance. ",
        });

        if consecutive_count >= crate::logic::history::CRITICAL_CONSECUTIVE {
            advice.push_str("URGENT: Immediate rotation change strongly recommended. ");
        }

        advice
    }

    /// Look up the family for a crop name. Unknown crops return `None` and
    /// are treated as unclassified by the analysis layer.
    pub fn for_crop(name: &str) -> Option<CropFamily> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        ALL_FAMILIES.into_iter().find(|family| {
            family
                .common_crops()
                .iter()
                .any(|crop| crop.eq_ignore_ascii_case(name))
        })
    }

    /// Whether two crop names belong to the same known family.
    pub fn same_family(a: &str, b: &str) -> bool {
        match (CropFamily::for_crop(a), CropFamily::for_crop(b)) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        }
    }
}

impl std::fmt::Display for CropFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.family_name())
    }
}

impl RootDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootDepth::Shallow => "Shallow",
            RootDepth::Medium => "Medium",
            RootDepth::Deep => "Deep",
        }
    }

    pub fn typical_depth_cm(&self) -> u32 {
        match self {
            RootDepth::Shallow => 30,
            RootDepth::Medium => 60,
            RootDepth::Deep => 120,
        }
    }

    pub fn nutrient_impact(&self) -> &'static str {
        match self {
            RootDepth::Shallow => "Topsoil nutrient depletion risk",
            RootDepth::Medium => "Balanced nutrient uptake",
            RootDepth::Deep => "Nutrient cycling from deeper layers",
        }
    }

    /// Typical root depth for a crop name, defaulting to `Medium` when the
    /// crop is not in the taxonomy.
    pub fn for_crop(name: &str) -> RootDepth {
        CropFamily::for_crop(name)
            .map(|f| f.typical_root_depth())
            .unwrap_or(RootDepth::Medium)
    }
}

impl std::fmt::Display for RootDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(CropFamily::for_crop("rice"), Some(CropFamily::Cereals));
        assert_eq!(CropFamily::for_crop("RICE"), Some(CropFamily::Cereals));
        assert_eq!(CropFamily::for_crop("  Paddy "), Some(CropFamily::Cereals));
        assert_eq!(CropFamily::for_crop("greengram"), Some(CropFamily::Legumes));
        assert_eq!(CropFamily::for_crop("Bottle Gourd"), Some(CropFamily::Cucurbits));
    }

    #[test]
    fn unknown_crops_degrade_gracefully() {
        assert_eq!(CropFamily::for_crop("Quinoa"), None);
        assert_eq!(CropFamily::for_crop(""), None);
        assert_eq!(RootDepth::for_crop("Quinoa"), RootDepth::Medium);
    }

    #[test]
    fn root_depth_follows_family() {
        assert_eq!(RootDepth::for_crop("Rice"), RootDepth::Deep);
        assert_eq!(RootDepth::for_crop("Cabbage"), RootDepth::Shallow);
        assert_eq!(RootDepth::for_crop("Chickpea"), RootDepth::Medium);
        assert_eq!(RootDepth::for_crop("Cotton"), RootDepth::Deep);
    }

    #[test]
    fn same_family_requires_both_known() {
        assert!(CropFamily::same_family("Rice", "Wheat"));
        assert!(!CropFamily::same_family("Rice", "Chickpea"));
        assert!(!CropFamily::same_family("Rice", "Quinoa"));
        assert!(!CropFamily::same_family("Quinoa", "Quinoa"));
    }

    #[test]
    fn every_table_crop_resolves_to_its_family() {
        for family in ALL_FAMILIES {
            for crop in family.common_crops() {
                assert_eq!(CropFamily::for_crop(crop), Some(family), "crop: {}", crop);
            }
        }
    }

    #[test]
    fn rotation_advice_flags_urgent_runs() {
        let normal = CropFamily::Cereals.rotation_advice(2);
        let urgent = CropFamily::Cereals.rotation_advice(3);
        assert!(!normal.contains("URGENT"));
        assert!(urgent.contains("URGENT"));
    }
}
