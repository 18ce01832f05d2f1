// ABOUTME: Fixed scoring policy constants for health risk assessment
// ABOUTME: BMI, blood pressure, blood work, age, weighting, and validation range thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring policy constants.
//!
//! The scoring policy is hand-tuned and fixed at compile time. Point tables
//! for the enumerated lifestyle factors live with the scoring functions in
//! the intelligence crate; this module holds the numeric thresholds.

/// Body-mass index thresholds (kg/m²)
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// At or above this is overweight
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// At or above this is obese (class I)
    pub const OBESE_FROM: f64 = 30.0;
    /// At or above this is obese class II
    pub const OBESE_CLASS_II_FROM: f64 = 35.0;
    /// At or above this is obese class III
    pub const OBESE_CLASS_III_FROM: f64 = 40.0;
    /// Decimal places BMI is rounded to
    pub const DECIMAL_PLACES: usize = 2;
}

/// Blood pressure thresholds (mmHg)
pub mod blood_pressure {
    /// Systolic reading at or above which a crisis is assumed
    pub const CRISIS_SYSTOLIC: u16 = 180;
    /// Diastolic reading at or above which a crisis is assumed
    pub const CRISIS_DIASTOLIC: u16 = 120;
    /// Stage 2 hypertension systolic threshold
    pub const STAGE_2_SYSTOLIC: u16 = 140;
    /// Stage 2 hypertension diastolic threshold
    pub const STAGE_2_DIASTOLIC: u16 = 90;
    /// Stage 1 hypertension systolic threshold
    pub const STAGE_1_SYSTOLIC: u16 = 130;
    /// Stage 1 hypertension diastolic threshold
    pub const STAGE_1_DIASTOLIC: u16 = 80;
    /// Elevated systolic threshold
    pub const ELEVATED_SYSTOLIC: u16 = 120;
}

/// Fasting blood sugar thresholds (mg/dL)
pub mod blood_sugar {
    /// Diabetic range
    pub const DIABETIC_FROM: f64 = 126.0;
    /// Pre-diabetic range
    pub const PRE_DIABETIC_FROM: f64 = 100.0;
    /// High-normal range
    pub const HIGH_NORMAL_FROM: f64 = 90.0;
}

/// Cholesterol thresholds (mg/dL)
pub mod cholesterol {
    /// High total cholesterol
    pub const TOTAL_HIGH_FROM: u16 = 240;
    /// Borderline-high total cholesterol, also the recommendation trigger
    pub const TOTAL_BORDERLINE_FROM: u16 = 200;
    /// Upper-normal total cholesterol
    pub const TOTAL_UPPER_NORMAL_FROM: u16 = 170;
    /// HDL below this is poor
    pub const HDL_POOR_BELOW: u16 = 40;
    /// HDL below this is borderline
    pub const HDL_BORDERLINE_BELOW: u16 = 50;
}

/// Waist circumference thresholds (cm), single ladder regardless of gender
pub mod waist {
    /// Above this scores the highest band
    pub const HIGH_ABOVE: f64 = 102.0;
    /// Above this scores the middle band
    pub const ELEVATED_ABOVE: f64 = 88.0;
    /// Above this scores the lowest band
    pub const MILD_ABOVE: f64 = 80.0;
}

/// Age bands (whole years) used by the lifestyle score
pub mod age {
    /// Senior band
    pub const SENIOR_FROM: u32 = 65;
    /// Middle-age band
    pub const MIDDLE_AGE_FROM: u32 = 45;
    /// Early middle-age band
    pub const EARLY_MIDDLE_AGE_FROM: u32 = 35;
}

/// Sub-score bounds and overall weighting
pub mod scoring {
    /// Maximum value of any sub-score or the overall score
    pub const MAX_SCORE: u8 = 100;
    /// Cardiovascular weight in the overall score
    pub const CARDIOVASCULAR_WEIGHT: f64 = 0.4;
    /// Diabetes weight in the overall score
    pub const DIABETES_WEIGHT: f64 = 0.3;
    /// Lifestyle weight in the overall score
    pub const LIFESTYLE_WEIGHT: f64 = 0.3;
}

/// Overall score boundaries between risk levels (inclusive lower bounds)
pub mod risk_levels {
    /// Overall score at which risk becomes moderate
    pub const MODERATE_FROM: u8 = 25;
    /// Overall score at which risk becomes high
    pub const HIGH_FROM: u8 = 50;
    /// Overall score at which risk becomes very high
    pub const VERY_HIGH_FROM: u8 = 75;
}

/// Goal progress bounds
pub mod goal_progress {
    /// Lowest progress percentage
    pub const MIN_PERCENT: u8 = 0;
    /// Highest progress percentage
    pub const MAX_PERCENT: u8 = 100;
}

/// Separator between recommendation paragraphs in stored text
pub const RECOMMENDATION_SEPARATOR: &str = "\n\n";

/// Accepted measurement ranges enforced before scoring
pub mod input_ranges {
    /// Inclusive numeric range for a measurement
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct MeasurementRange {
        /// Field name as it appears in input documents
        pub field: &'static str,
        /// Lowest accepted value
        pub min: f64,
        /// Highest accepted value
        pub max: f64,
    }

    impl MeasurementRange {
        /// Whether `value` lies within the range
        #[must_use]
        pub fn contains(&self, value: f64) -> bool {
            value.is_finite() && (self.min..=self.max).contains(&value)
        }
    }

    /// Height in centimeters
    pub const HEIGHT_CM: MeasurementRange = MeasurementRange {
        field: "height_cm",
        min: 50.0,
        max: 300.0,
    };
    /// Weight in kilograms
    pub const WEIGHT_KG: MeasurementRange = MeasurementRange {
        field: "weight_kg",
        min: 20.0,
        max: 500.0,
    };
    /// Waist circumference in centimeters
    pub const WAIST_CM: MeasurementRange = MeasurementRange {
        field: "waist_cm",
        min: 30.0,
        max: 200.0,
    };
    /// Systolic blood pressure
    pub const SYSTOLIC_BP: MeasurementRange = MeasurementRange {
        field: "systolic_bp",
        min: 60.0,
        max: 250.0,
    };
    /// Diastolic blood pressure
    pub const DIASTOLIC_BP: MeasurementRange = MeasurementRange {
        field: "diastolic_bp",
        min: 40.0,
        max: 150.0,
    };
    /// Resting heart rate
    pub const HEART_RATE: MeasurementRange = MeasurementRange {
        field: "heart_rate",
        min: 30.0,
        max: 220.0,
    };
    /// Fasting blood sugar
    pub const BLOOD_SUGAR: MeasurementRange = MeasurementRange {
        field: "blood_sugar",
        min: 30.0,
        max: 600.0,
    };
    /// Total cholesterol
    pub const CHOLESTEROL_TOTAL: MeasurementRange = MeasurementRange {
        field: "cholesterol_total",
        min: 50.0,
        max: 500.0,
    };
    /// HDL cholesterol
    pub const CHOLESTEROL_HDL: MeasurementRange = MeasurementRange {
        field: "cholesterol_hdl",
        min: 10.0,
        max: 150.0,
    };
    /// LDL cholesterol
    pub const CHOLESTEROL_LDL: MeasurementRange = MeasurementRange {
        field: "cholesterol_ldl",
        min: 30.0,
        max: 400.0,
    };
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const PIERRE_HEALTH_RISK: &str = "pierre-health-risk";
}

/// Environment variable names read by the application layer
pub mod env_config {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "PIERRE_HEALTH_ENVIRONMENT";
    /// Log level override
    pub const LOG_LEVEL: &str = "PIERRE_HEALTH_LOG_LEVEL";
    /// CLI output format
    pub const OUTPUT_FORMAT: &str = "PIERRE_HEALTH_OUTPUT_FORMAT";
    /// Reject unrecognized categorical values instead of applying defaults
    pub const STRICT_VALIDATION: &str = "PIERRE_HEALTH_STRICT_VALIDATION";
}

/// Dashboard chart and summary limits
pub mod history {
    /// Number of scored assessments shown on the history chart
    pub const CHART_ASSESSMENT_LIMIT: usize = 10;
    /// Number of recent assessments listed on the dashboard
    pub const RECENT_ASSESSMENT_LIMIT: usize = 5;
    /// Number of active goals listed on the dashboard
    pub const RECENT_GOAL_LIMIT: usize = 5;
    /// Decimal places of the average overall risk
    pub const AVERAGE_RISK_DECIMAL_PLACES: usize = 1;
}
