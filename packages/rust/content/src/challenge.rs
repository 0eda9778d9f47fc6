//! Visualization challenge builder.

use tracing::debug;

use takehome_dataset::OpsRecord;
use takehome_shared::Document;

use crate::funnel;

/// Page title the challenge is published under.
pub const CHALLENGE_TITLE: &str = "Meta Supply-Chain Viz Question";

const CHALLENGE_HEAD: &str = r#"
# Meta Supply-Chain Visualization Challenge

## Context
Meta's supply chain operations involve complex logistics networks spanning global manufacturing, distribution, and delivery systems. As a Data Scientist, you need to create visualizations that help stakeholders understand supply chain efficiency and identify bottlenecks.

## The Challenge

### Problem Statement
You've been tasked with analyzing Meta's hardware supply chain data to create a comprehensive dashboard that visualizes:

1. **Supply Chain Funnel Analysis**: Show conversion rates at each stage
2. **Bottleneck Identification**: Highlight areas of inefficiency
3. **Performance Metrics**: Track key supply chain KPIs
4. **Predictive Insights**: Forecast potential disruptions

### Data Description
You have access to the following datasets:

- **Raw Materials**: Supplier performance, lead times, quality scores
- **Manufacturing**: Production capacity, yield rates, downtime
- **Distribution**: Warehouse efficiency, shipping times, costs
- **Retail**: Inventory levels, sell-through rates, returns
- **Customer**: Delivery satisfaction, return rates, feedback

### Visualization Requirements

#### Primary Visualization: Supply Chain Funnel
Create a funnel chart showing the efficiency at each stage of the supply chain:

"#;

const CHALLENGE_MID: &str = r#"
#### Secondary Visualizations
1. **Time Series Dashboard**: Monthly trends for each stage
2. **Geographic Heatmap**: Regional performance variations
3. **Correlation Matrix**: Relationships between different metrics
4. **Predictive Model Output**: Forecasted bottlenecks

### Technical Implementation

#### Tools and Technologies
- **Python**: pandas, matplotlib, seaborn, plotly
- **SQL**: Data extraction and aggregation
- **Tableau/Power BI**: Interactive dashboard creation
- **Machine Learning**: Predictive modeling for forecasting

#### Code Structure
```python
import pandas as pd
import matplotlib.pyplot as plt
import seaborn as sns
import plotly.graph_objects as go
from plotly.subplots import make_subplots

# Data loading and preprocessing
def load_supply_chain_data():
    # Implementation here
    pass

# Funnel visualization
def create_funnel_chart(data):
    # Implementation here
    pass

# Dashboard creation
def build_dashboard(data):
    # Implementation here
    pass
```

### Pipeline Benchmarks
Baseline timings and reliability for the modeling pipeline you are expected to improve on:

"#;

const CHALLENGE_TAIL: &str = r#"
### Business Impact Analysis

#### Current State Assessment
- **Overall Efficiency**: 45% end-to-end conversion
- **Major Bottleneck**: Customer delivery and satisfaction (15% loss)
- **Secondary Issues**: Manufacturing quality (15% loss)
- **Optimization Potential**: 25-30% improvement possible

#### Recommended Actions
1. **Improve Customer Experience**:
   - Enhance delivery tracking systems
   - Implement proactive communication
   - Optimize last-mile delivery routes

2. **Manufacturing Quality Enhancement**:
   - Implement stricter quality controls
   - Invest in automated testing systems
   - Improve supplier qualification processes

3. **Distribution Optimization**:
   - Warehouse automation initiatives
   - Route optimization algorithms
   - Inventory management improvements

### Success Metrics

#### Primary KPIs
- **End-to-End Efficiency**: Target 60% (from current 45%)
- **Customer Satisfaction**: Target 90% (from current 75%)
- **Manufacturing Yield**: Target 95% (from current 85%)
- **Distribution Efficiency**: Target 85% (from current 70%)

#### Secondary Metrics
- Cost per unit delivered
- Average delivery time
- Return rate reduction
- Supplier performance scores

### Next Steps

1. **Data Collection**: Gather historical data for trend analysis
2. **Model Development**: Build predictive models for bottleneck forecasting
3. **Dashboard Deployment**: Create interactive visualizations for stakeholders
4. **Monitoring Setup**: Implement real-time tracking systems
5. **Continuous Improvement**: Regular review and optimization cycles

---
*This visualization challenge is part of the Interview Query take-home assignment series.*
"#;

/// Build the visualization challenge, embedding the funnel and the
/// operations benchmark table.
pub fn build_challenge(ops: &[OpsRecord]) -> Document {
    let mut md = String::from(CHALLENGE_HEAD);

    md.push_str(&funnel::render_funnel(&funnel::default_stages()));
    md.push_str(CHALLENGE_MID);
    md.push_str(&ops_table(ops));
    md.push_str(CHALLENGE_TAIL);

    debug!(len = md.len(), "challenge built");
    Document::new(CHALLENGE_TITLE, md)
}

/// Render the operations benchmark as a markdown table.
fn ops_table(ops: &[OpsRecord]) -> String {
    let mut md = String::from("| Operation | Time (hours) | Success Rate |\n| --- | --- | --- |\n");

    for record in ops {
        md.push_str(&format!(
            "| {} | {:.1} | {:.0}% |\n",
            record.operation,
            record.time_hours,
            record.success_rate * 100.0
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops() -> Vec<OpsRecord> {
        vec![
            OpsRecord {
                operation: "Data Collection".into(),
                time_hours: 2.0,
                success_rate: 0.95,
            },
            OpsRecord {
                operation: "Deployment".into(),
                time_hours: 3.0,
                success_rate: 0.92,
            },
        ]
    }

    #[test]
    fn challenge_contains_funnel_and_benchmarks() {
        let doc = build_challenge(&ops());

        assert_eq!(doc.title, CHALLENGE_TITLE);
        assert!(doc.markdown.contains("```mermaid"));
        assert!(doc.markdown.contains("Raw Materials"));
        assert!(doc.markdown.contains("| Data Collection | 2.0 | 95% |"));
        assert!(doc.markdown.contains("| Deployment | 3.0 | 92% |"));
    }

    #[test]
    fn challenge_covers_required_elements() {
        let doc = build_challenge(&ops());

        // The checklist's per-section elements: context, visualization, solution space
        assert!(doc.markdown.contains("## Context"));
        assert!(doc.markdown.contains("### Visualization Requirements"));
        assert!(doc.markdown.contains("### Next Steps"));
    }

    #[test]
    fn ops_table_formats_rates_as_percent() {
        let table = ops_table(&ops());
        assert!(table.starts_with("| Operation |"));
        assert!(table.contains("95%"));
    }
}
