//! Plain-text rendering of assessments for the terminal.

use std::fmt;

use airwise_core::models::weights::Weights;

use crate::report::Assessment;

const BAR_WIDTH: usize = 20;

pub const USEFUL_LINKS: &[(&str, &str)] = &[
    ("NHS asthma guidance", "https://www.nhs.uk/conditions/asthma/"),
    (
        "Asthma + Lung UK (triggers)",
        "https://www.asthmaandlung.org.uk/conditions/asthma/asthma-triggers",
    ),
    ("UK Air (air pollution)", "https://uk-air.defra.gov.uk/"),
];

pub const FOOTER: &str = "This tool provides an environmental risk signal only. It does not \
                          diagnose asthma or replace medical advice.";

/// `[#####---------------] 2.5/10`
pub fn score_bar(score: f64) -> String {
    let filled = ((score / 10.0).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {score:.1}/10",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Dashboard, recommendations and footer for one assessment.
pub struct TextReport<'a>(pub &'a Assessment);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        let result = &assessment.result;

        match assessment.location {
            Some(location) => writeln!(f, "Asthma Environmental Risk Index @ {location}")?,
            None => writeln!(f, "Asthma Environmental Risk Index")?,
        }
        writeln!(
            f,
            "Timestamp: {}",
            assessment.reading.timestamp.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f)?;

        writeln!(f, "Risk category:     {}", result.category.as_str().to_uppercase())?;
        writeln!(f, "Final score:       {:.1} (0-10)", result.final_score)?;
        writeln!(f, "Dominant factor:   {}", result.dominant)?;
        writeln!(
            f,
            "Medical amplifier: x{:.1} ({} flag(s))",
            result.amplifier, result.medical_factor_count
        )?;
        writeln!(f, "Risk level:        {}", score_bar(result.final_score))?;
        writeln!(f)?;

        writeln!(f, "Factor breakdown")?;
        writeln!(
            f,
            "  {:<10} {:>9} {:>7} {:>9}",
            "factor", "sub-index", "weight", "weighted"
        )?;
        for row in &assessment.breakdown {
            writeln!(
                f,
                "  {:<10} {:>9} {:>7.2} {:>9.2}",
                row.factor.id(),
                row.sub_index,
                row.weight,
                row.weighted_score
            )?;
        }
        writeln!(f)?;

        writeln!(f, "What to do today")?;
        for rec in &assessment.recommendations {
            writeln!(f, "  - {rec}")?;
        }
        writeln!(f)?;

        writeln!(f, "Useful links")?;
        for (name, url) in USEFUL_LINKS {
            writeln!(f, "  - {name}: {url}")?;
        }
        writeln!(f)?;
        writeln!(f, "{FOOTER}")
    }
}

pub fn render_text(assessment: &Assessment) -> String {
    TextReport(assessment).to_string()
}

pub struct WeightTable<'a>(pub &'a Weights);

impl fmt::Display for WeightTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {:>6}", "factor", "weight")?;
        for (factor, weight) in self.0.iter() {
            writeln!(f, "{:<10} {:>6.1}", factor.id(), weight)?;
        }
        Ok(())
    }
}

pub fn render_weights(weights: &Weights) -> String {
    WeightTable(weights).to_string()
}
