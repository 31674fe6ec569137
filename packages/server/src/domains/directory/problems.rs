//! Open-problem seed content.
//!
//! The open problems are in-repo seed data rather than part of the dataset
//! file, sourced from Anthropic's recommended alignment research directions
//! (<https://alignment.anthropic.com/2025/recommended-directions/>).

use chrono::NaiveDate;

use super::models::{Difficulty, OpenProblem, ProblemStatus};
use crate::common::slugify;

const SEED_SUBMITTER: &str = "Anthropic Alignment Science";

struct Seed {
    title: &'static str,
    description: &'static str,
    focus_area: &'static str,
    difficulty: Difficulty,
    related_work: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Evaluating AI Capabilities",
        description: "How do we measure how capable AI systems are? Many AI capability benchmarks saturate quickly and fail to provide extrapolatable signals of AI progress. We need high-quality assessments that actually track real-world impact, especially for capabilities like conducting novel research, tool use, and autonomous task completion.",
        focus_area: "Evaluations",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Evaluating Alignment",
        description: "How do we measure how aligned AI systems are? Current measurements focus on surface-level properties (pleasant assistants, refusing harmful queries). We need to measure deeper properties: Does the model have hidden goals? Does it fake being aligned? Under what conditions would it mislead humans?",
        focus_area: "Alignment",
        difficulty: Difficulty::Hard,
        related_work: &["Alignment faking in large language models"],
    },
    Seed {
        title: "Understanding Model Cognition",
        description: "What are models 'thinking' when they generate outputs? We need to supplement behavioral understanding with study of underlying cognition: When the model gave an answer, did it think it was correct or just user-pleasing? Do models form plans? What do they know about their situation?",
        focus_area: "Interpretability",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Chain-of-Thought Faithfulness",
        description: "When can we take a model's chain-of-thought at face value? Language models don't always say what they think and may systematically misrepresent reasoning. We need techniques for detecting or ensuring that externalized reasoning faithfully represents internal computation.",
        focus_area: "Interpretability",
        difficulty: Difficulty::Medium,
        related_work: &["Language Models Don't Always Say What They Think"],
    },
    Seed {
        title: "AI Control",
        description: "Can we prevent AI systems from causing harm even if they are misaligned? Control techniques aim to limit damage by monitoring AI behavior, restricting capabilities, or requiring human approval. Key challenges include maintaining safety guarantees as systems become more capable.",
        focus_area: "Control",
        difficulty: Difficulty::Hard,
        related_work: &["AI Control: Improving Safety Despite Intentional Subversion"],
    },
    Seed {
        title: "Behavioral Monitoring",
        description: "Can we detect dangerous AI behavior from observing actions? This includes anomaly detection, threat modeling, and developing classifiers for concerning behavioral patterns. Challenges include avoiding false positives while catching sophisticated attempts to appear benign.",
        focus_area: "Control",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
    Seed {
        title: "Activation Monitoring",
        description: "Can we detect dangerous AI cognition from internal activations? Beyond behavioral monitoring, can we identify concerning internal states (deceptive reasoning, goal-directed planning) by analyzing model activations in real-time?",
        focus_area: "Interpretability",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Scalable Oversight",
        description: "How do we provide accurate training signals for tasks humans cannot directly evaluate? As AI systems become capable of tasks beyond human evaluation, we need methods like debate, recursive reward modeling, and market-based approaches to maintain oversight.",
        focus_area: "Scalable Oversight",
        difficulty: Difficulty::Hard,
        related_work: &["AI safety via debate"],
    },
    Seed {
        title: "Recursive Oversight",
        description: "Can AI systems help oversee other AI systems in a trustworthy way? Recursive oversight uses AI to evaluate AI, but faces bootstrapping challenges: how do we trust AI oversight if we can't evaluate the overseers?",
        focus_area: "Scalable Oversight",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Weak-to-Strong Generalization",
        description: "Can weaker overseers train stronger AI systems? If we supervise powerful models with weaker models or humans, will the strong model learn to be genuinely good, or just learn to appear good to weak overseers?",
        focus_area: "Scalable Oversight",
        difficulty: Difficulty::Hard,
        related_work: &["Weak-to-Strong Generalization"],
    },
    Seed {
        title: "Honesty and Truthfulness",
        description: "Can we identify when models are being honest, even if we can't judge accuracy? We need to find common structure to honest responses, possibly by leveraging the model's own knowledge about whether it is responding truthfully.",
        focus_area: "Alignment",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
    Seed {
        title: "Adversarial Robustness for AI Safety",
        description: "Can we ensure AI systems behave as desired despite adversarial attacks? This includes defending against jailbreaks, prompt injection, data poisoning, and attacks from sophisticated AI adversaries trying to circumvent monitors.",
        focus_area: "Alignment",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
    Seed {
        title: "Realistic Jailbreak Benchmarks",
        description: "How do we measure real-world harm from AI misuse? Current benchmarks measure refusal rates, but we need to measure whether jailbreaks enable realistic harmful outcomes that wouldn't be possible without AI assistance.",
        focus_area: "Evaluations",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
    Seed {
        title: "Adaptive Defenses",
        description: "Can we develop safeguards that adapt to attackers? Instead of static defenses, can we build systems that monitor attack patterns across queries, patch vulnerabilities rapidly, and respond to adversarial behavior in real-time?",
        focus_area: "Control",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
    Seed {
        title: "Unlearning Dangerous Capabilities",
        description: "Can we make models genuinely forget dangerous information? Current unlearning methods are easily circumvented. We need techniques that produce models behaving near-identically to models never trained on dangerous data, even after fine-tuning attempts to recover it.",
        focus_area: "Unlearning",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Multi-Agent Alignment and Governance",
        description: "How do we guard against risks from many interacting AI agents? Even individually aligned agents can exhibit failure modes from poor coordination: negative externalities aggregating, responsibility diffusion, information not reaching decision-makers. We may need learned governance systems.",
        focus_area: "Cooperative AI",
        difficulty: Difficulty::Hard,
        related_work: &[],
    },
    Seed {
        title: "Model Persona and Value Generalization",
        description: "How does a model's 'personality' affect safety-critical behavior? Small changes in persona may have important impacts on behavior in novel situations. We need to understand how personality differences affect alignment properties like propensity to fake alignment.",
        focus_area: "Alignment",
        difficulty: Difficulty::Medium,
        related_work: &[],
    },
];

/// Build the open-problem seed list.
pub fn open_problem_seed() -> Vec<OpenProblem> {
    let created_at = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();

    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| OpenProblem {
            id: i as u32 + 1,
            slug: slugify(seed.title),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            focus_area: seed.focus_area.to_string(),
            status: ProblemStatus::Open,
            difficulty: seed.difficulty,
            submitted_by: SEED_SUBMITTER.to_string(),
            created_at,
            related_work: seed.related_work.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_slugs_unique_and_well_formed() {
        let problems = open_problem_seed();
        assert!(!problems.is_empty());

        let mut slugs: Vec<_> = problems.iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), problems.len(), "duplicate seed slug");

        for p in &problems {
            assert!(!p.slug.starts_with('-'));
            assert!(!p.slug.ends_with('-'));
            assert!(!p.slug.contains("--"));
        }
    }

    #[test]
    fn test_seed_ids_sequential() {
        let problems = open_problem_seed();
        for (i, p) in problems.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert_eq!(p.status, ProblemStatus::Open);
        }
    }
}
