//! Interview guide builder.

use tracing::debug;

use takehome_dataset::QuestionRecord;
use takehome_shared::Document;

/// Page title the guide is published under.
pub const GUIDE_TITLE: &str = "Meesho Data Scientist Guide";

/// Most categories shown in the sample-questions section.
const MAX_CATEGORIES: usize = 5;

/// Most questions shown per category.
const MAX_QUESTIONS_PER_CATEGORY: usize = 3;

/// Fixed head of the guide: the seven required sections.
const GUIDE_HEAD: &str = r#"
# Meesho Data Science Interview Guide

## Role Overview & Culture
The Data Scientist role at Meesho blends business impact with experimentation. As a growing e-commerce platform focused on India's tier 2+ cities, Meesho depends on data-driven decision-making to optimize user experience, product recommendations, pricing strategies, and supply chain efficiency.

Meesho's culture values ownership, experimentation, and fast execution. Data scientists are expected to proactively drive insights and collaborate cross-functionally with product, engineering, and business teams.

### Why This Role at Meesho?
Meesho offers a unique opportunity to solve complex problems at scale for a rapidly growing user base. With a lean but impactful team, data scientists often see their models influence key business metrics.

The company is known for giving autonomy, exposure to leadership, and fast-tracked growth for high performers.

## Interview Process

```mermaid
flowchart TD
    A[Online Application or Referral] --> B[Recruiter Screening]
    B --> C[Technical Interview 1]
    C --> D[Technical Interview 2]
    D --> E[Behavioral or Culture Fit Round]
    E --> F[Hiring Manager / Final Round]
    F --> G[Offer]
```

### Differences by Level
- **Data Scientist 1**: More foundational questions and hands-on coding challenges
- **Senior candidates**: Evaluated on system design, stakeholder communication, and experimentation design

## SQL Challenges
Expect queries on aggregations, window functions, and joins that mirror real analytics use cases.

**Example**: "Write a query to find the top 5 products by return rate."

## Python for Data Science
Focus on data wrangling with Pandas, basic stats, and implementation of common algorithms.

**Example**: "Implement a function to detect outliers in a dataset."

## Machine Learning
Questions can cover both ML theory and practical applications (e.g., feature selection, model evaluation).

**Example**: "How would you build a recommendation engine for Meesho users?"

## Experiment Design
Understand A/B testing setup, interpreting p-values, and drawing business conclusions.

**Example**: "A new homepage layout increased user session time. How would you validate if it's a significant improvement?"

## Metric Definition
Expect to be asked how to define core metrics for user engagement or conversion.

**Example**: "What metrics would you track to evaluate a new seller onboarding funnel?"

## Sample Questions by Category
"#;

/// Fixed tail of the guide: preparation strategy, success factors, resources.
const GUIDE_TAIL: &str = r#"

## Preparation Strategy

### Technical Preparation
- Practice SQL queries on platforms like HackerRank
- Build end-to-end ML projects
- Study system design patterns
- Review statistical concepts
- Practice coding in Python

### Behavioral Preparation
- Prepare STAR format examples
- Research Meesho's business model
- Understand e-commerce metrics
- Practice explaining technical concepts
- Prepare questions about the role

## Key Success Factors

- **Technical Depth**: Demonstrate strong fundamentals
- **Business Acumen**: Connect technical solutions to business impact
- **Communication**: Explain complex concepts clearly
- **Problem-Solving**: Show structured thinking approach
- **Cultural Fit**: Align with Meesho's values and mission

## Resources

- [Meesho Engineering Blog](https://medium.com/meesho-tech)
- [SQL Practice Platform](https://www.hackerrank.com/domains/sql)
- [Machine Learning Course](https://www.coursera.org/learn/machine-learning)
- [Statistics Refresher](https://www.khanacademy.org/math/statistics-probability)
- [System Design Primer](https://github.com/donnemartin/system-design-primer)

---
*This guide is part of the Interview Query take-home assignment series.*
"#;

/// Build the interview guide, interpolating sample questions from the
/// question bank.
pub fn build_guide(questions: &[QuestionRecord]) -> Document {
    let mut md = String::from(GUIDE_HEAD);

    for (category, sampled) in group_by_category(questions) {
        md.push_str(&format!("\n### {category} Questions\n\n"));
        for (i, question) in sampled.iter().enumerate() {
            md.push_str(&format!("{}. {question}\n", i + 1));
        }
    }

    md.push_str(GUIDE_TAIL);

    debug!(len = md.len(), "guide built");
    Document::new(GUIDE_TITLE, md)
}

/// Group questions by category in first-seen order, capped at
/// [`MAX_CATEGORIES`] categories of [`MAX_QUESTIONS_PER_CATEGORY`] questions.
fn group_by_category(questions: &[QuestionRecord]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for record in questions {
        match groups.iter_mut().find(|(cat, _)| *cat == record.category) {
            Some((_, items)) => {
                if items.len() < MAX_QUESTIONS_PER_CATEGORY {
                    items.push(record.question.clone());
                }
            }
            None => {
                if groups.len() < MAX_CATEGORIES {
                    groups.push((record.category.clone(), vec![record.question.clone()]));
                }
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, question: &str) -> QuestionRecord {
        QuestionRecord {
            category: category.into(),
            question: question.into(),
            difficulty: "Medium".into(),
        }
    }

    #[test]
    fn guide_contains_all_required_sections() {
        let doc = build_guide(&[record("SQL", "q1")]);

        for section in [
            "Role Overview & Culture",
            "Interview Process",
            "SQL Challenges",
            "Python for Data Science",
            "Machine Learning",
            "Experiment Design",
            "Metric Definition",
        ] {
            assert!(doc.markdown.contains(section), "missing section {section}");
        }
        assert_eq!(doc.title, GUIDE_TITLE);
    }

    #[test]
    fn guide_interpolates_dataset_questions() {
        let doc = build_guide(&[
            record("SQL", "Find duplicate orders"),
            record("Python", "Parse nested JSON"),
        ]);

        assert!(doc.markdown.contains("### SQL Questions"));
        assert!(doc.markdown.contains("1. Find duplicate orders"));
        assert!(doc.markdown.contains("### Python Questions"));
        assert!(doc.markdown.contains("1. Parse nested JSON"));
    }

    #[test]
    fn grouping_caps_categories_and_questions() {
        let mut questions = Vec::new();
        for cat in ["A", "B", "C", "D", "E", "F"] {
            for i in 0..4 {
                questions.push(record(cat, &format!("{cat} question {i}")));
            }
        }

        let groups = group_by_category(&questions);
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|(_, items)| items.len() == 3));
        // First-seen order preserved, sixth category dropped
        assert_eq!(groups[0].0, "A");
        assert!(!groups.iter().any(|(cat, _)| cat == "F"));
    }

    #[test]
    fn guide_has_no_deep_headings() {
        let doc = build_guide(&[record("SQL", "q")]);
        assert!(!doc.markdown.lines().any(|l| l.starts_with("####")));
    }
}
