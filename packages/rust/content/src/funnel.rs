//! Supply-chain funnel rendering.
//!
//! The published page embeds a single text block, so the funnel is emitted as
//! markdown (a mermaid flowchart plus derived stage insights) rather than a
//! raster image.

/// One stage of the efficiency funnel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelStage {
    /// Stage label.
    pub label: &'static str,
    /// Conversion reaching this stage, in percent.
    pub percent: u32,
    /// Short note on where the stage's losses come from.
    pub note: &'static str,
}

/// The fixed hardware supply-chain stage table.
pub fn default_stages() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            label: "Raw Materials",
            percent: 100,
            note: "Starting point with all suppliers",
        },
        FunnelStage {
            label: "Manufacturing",
            percent: 85,
            note: "loss due to quality issues and delays",
        },
        FunnelStage {
            label: "Distribution",
            percent: 70,
            note: "loss from logistics inefficiencies",
        },
        FunnelStage {
            label: "Retail",
            percent: 60,
            note: "loss from inventory management issues",
        },
        FunnelStage {
            label: "Customer",
            percent: 45,
            note: "loss from delivery and satisfaction problems",
        },
    ]
}

/// Render the funnel as a fenced mermaid block followed by key insights.
pub fn render_funnel(stages: &[FunnelStage]) -> String {
    let mut md = String::from("```mermaid\nflowchart TD\n");

    for (i, stage) in stages.iter().enumerate() {
        if i + 1 < stages.len() {
            let next = &stages[i + 1];
            md.push_str(&format!(
                "    S{i}[\"{}: {}%\"] --> S{}[\"{}: {}%\"]\n",
                stage.label,
                stage.percent,
                i + 1,
                next.label,
                next.percent
            ));
        }
    }
    md.push_str("```\n\n**Key Insights from the Funnel:**\n");

    let mut prev_percent = None;
    for stage in stages {
        let insight = match prev_percent {
            None => format!(
                "- **{} ({}%)**: {}",
                stage.label, stage.percent, stage.note
            ),
            Some(prev) => {
                let loss: u32 = prev - stage.percent.min(prev);
                format!(
                    "- **{} ({}%)**: {}% {}",
                    stage.label, stage.percent, loss, stage.note
                )
            }
        };
        md.push_str(&insight);
        md.push('\n');
        prev_percent = Some(stage.percent);
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_renders_all_stages() {
        let md = render_funnel(&default_stages());

        assert!(md.starts_with("```mermaid\n"));
        for label in [
            "Raw Materials",
            "Manufacturing",
            "Distribution",
            "Retail",
            "Customer",
        ] {
            assert!(md.contains(label), "missing stage {label}");
        }
    }

    #[test]
    fn funnel_derives_stage_losses() {
        let md = render_funnel(&default_stages());

        assert!(md.contains("**Manufacturing (85%)**: 15% loss due to quality issues and delays"));
        assert!(md.contains("**Retail (60%)**: 10% loss from inventory management issues"));
        // Starting stage carries no loss figure
        assert!(md.contains("**Raw Materials (100%)**: Starting point with all suppliers"));
    }

    #[test]
    fn funnel_insights_are_five_bullets() {
        let md = render_funnel(&default_stages());
        let bullets = md.lines().filter(|l| l.starts_with("- ")).count();
        assert_eq!(bullets, 5);
    }
}
