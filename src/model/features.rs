use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Age,
    TumorCm,
    Grade,
    LymphNodes,
    Er,
    Pr,
    Her2,
    Vascular,
    Invasion,
    Comorbidity,
}

pub const N_FEATURES: usize = 10;

pub fn feature_order() -> &'static [Feature; N_FEATURES] {
    &[
        Feature::Age,
        Feature::TumorCm,
        Feature::Grade,
        Feature::LymphNodes,
        Feature::Er,
        Feature::Pr,
        Feature::Her2,
        Feature::Vascular,
        Feature::Invasion,
        Feature::Comorbidity,
    ]
}

impl Feature {
    pub fn index(self) -> usize {
        match self {
            Feature::Age => 0,
            Feature::TumorCm => 1,
            Feature::Grade => 2,
            Feature::LymphNodes => 3,
            Feature::Er => 4,
            Feature::Pr => 5,
            Feature::Her2 => 6,
            Feature::Vascular => 7,
            Feature::Invasion => 8,
            Feature::Comorbidity => 9,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::TumorCm => "tumor_cm",
            Feature::Grade => "grade",
            Feature::LymphNodes => "lymph_nodes",
            Feature::Er => "er",
            Feature::Pr => "pr",
            Feature::Her2 => "her2",
            Feature::Vascular => "vascular",
            Feature::Invasion => "invasion",
            Feature::Comorbidity => "comorbidity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::TumorCm => "Tumor size (cm)",
            Feature::Grade => "Grade (1-3)",
            Feature::LymphNodes => "Positive lymph nodes",
            Feature::Er => "ER (0/1)",
            Feature::Pr => "PR (0/1)",
            Feature::Her2 => "HER2 (0/1)",
            Feature::Vascular => "Vascularization (0/1)",
            Feature::Invasion => "Lymphovascular invasion (0/1)",
            Feature::Comorbidity => "Comorbidities (0/1)",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::TumorCm => "Tumor",
            Feature::Grade => "Grade",
            Feature::LymphNodes => "Lymph nodes",
            Feature::Er => "ER",
            Feature::Pr => "PR",
            Feature::Her2 => "HER2",
            Feature::Vascular => "Vasc",
            Feature::Invasion => "Inv",
            Feature::Comorbidity => "Comorb",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            Feature::Age => "55",
            Feature::TumorCm => "2.0",
            Feature::Grade => "2",
            Feature::LymphNodes => "0",
            Feature::Er | Feature::Pr => "1",
            Feature::Her2 | Feature::Vascular | Feature::Invasion | Feature::Comorbidity => "0",
        }
    }

    pub fn is_binary(self) -> bool {
        !matches!(
            self,
            Feature::Age | Feature::TumorCm | Feature::Grade | Feature::LymphNodes
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScale {
    pub min: f64,
    pub max: f64,
    pub divisor: f64,
}

impl FeatureScale {
    pub const fn new(min: f64, max: f64, divisor: f64) -> Self {
        Self { min, max, divisor }
    }

    /// Total over f64: NaN maps to the lower bound, infinities to the range ends.
    pub fn apply(&self, x: f64) -> f64 {
        let clamped = if x.is_nan() {
            self.min
        } else {
            x.max(self.min).min(self.max)
        };
        clamped / self.divisor
    }
}
