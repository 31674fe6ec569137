//! Prompt templates for the advisor endpoints.
//!
//! All four prompts are single-turn and instruct the model to emit JSON
//! only; the service layer strips an optional fenced code block and falls
//! back to a canned payload if parsing fails.

use super::context::{ItnContext, ITN_PUBLICATION_SAMPLE};

pub fn search_prompt(query: &str, data_context: &str) -> String {
    format!(
        r#"You are an AI safety research assistant. A user searched for: "{query}"

Based on this database of AI safety research:

{data_context}

Return a JSON response with:
1. "summary": A 1-2 sentence explanation of what exists on this topic
2. "results": An array of the most relevant items (max 15), each with:
   - "type": "publication" | "project" | "benchmark" | "organization"
   - "title": The item's name
   - "org": The organization (for non-org items)
   - "match_reason": WHY this is relevant to the query (1 sentence, be specific)
   - "relevance": "high" | "medium" | "low"
   - "slug": URL-safe version of the title

3. "related_topics": Array of 3-5 related research areas they might want to explore
4. "open_questions": 1-2 open research questions related to this topic
5. "no_results": true if nothing relevant found

Be specific about WHY each result matches. Don't just say "relates to X" - explain the connection.

Return ONLY valid JSON, no other text."#
    )
}

pub fn match_prompt(idea: &str, research_context: &str) -> String {
    format!(
        r#"You are an AI safety research advisor. A researcher has this idea:

"{idea}"

Compare against this database of existing AI safety research:

{research_context}

Return a JSON response with:
1. "has_overlap": true if significant similar work exists, false if novel
2. "overlap_summary": 1-2 sentences explaining the overlap situation
3. "matches": Array of up to 5 most relevant existing works, each with:
   - "type": "publication" | "project"
   - "title": exact title from the database
   - "org": organization name
   - "overlap": specific explanation of how this relates to the idea
   - "relevance": "high" (same approach), "medium" (related topic), "low" (tangentially related)
   - "slug": URL-safe version of title
4. "gaps": Array of 2-3 specific ways this idea differs from or extends existing work
5. "recommendation": What should they do? (read existing work, collaborate, pursue the gap, etc.)
6. "potential_collaborators": Array of org names working on related topics

Be specific and helpful. If the idea is novel, be encouraging. If overlap exists, be constructive about how to differentiate.

Return ONLY valid JSON, no other text."#
    )
}

pub fn itn_prompt(title: &str, description: &str, context: &ItnContext) -> String {
    let sample: Vec<&str> = context
        .publications
        .iter()
        .take(ITN_PUBLICATION_SAMPLE)
        .map(String::as_str)
        .collect();

    format!(
        r#"You are an AI safety research evaluator. Analyze this research problem using the ITN (Importance, Neglectedness, Tractability) framework.

PROBLEM TITLE: {title}

PROBLEM DESCRIPTION: {description}

CONTEXT - Existing AI Safety Research:
- {pub_count}+ publications in the database
- {org_count}+ organizations working on AI safety
- Existing open problems:
{problems}

Sample publications (for context):
{sample}

Evaluate this problem and return JSON with:

1. "importance": {{
   "score": 1-10 (how critical is solving this for AI safety?),
   "reasoning": "1 sentence explanation"
}}

2. "neglectedness": {{
   "score": 1-10 (10 = very neglected, 1 = heavily researched),
   "reasoning": "1 sentence explanation"
}}

3. "tractability": {{
   "score": 1-10 (how feasible is making progress?),
   "reasoning": "1 sentence explanation"
}}

4. "overall": weighted average (importance * 0.4 + neglectedness * 0.3 + tractability * 0.3)

5. "verdict": One of:
   - "Highly Promising" (overall >= 7.5)
   - "Worth Exploring" (overall >= 6)
   - "Moderate Priority" (overall >= 4)
   - "Low Priority" (overall < 4)

6. "summary": 2-3 sentences summarizing the assessment

7. "recommendations": Array of 3-4 specific next steps for the researcher

8. "related_work": Array of 2-3 relevant existing papers/projects from the database

9. "potential_collaborators": Array of 2-3 organizations that might be interested

Be rigorous but constructive. Consider the current state of AI safety research.

Return ONLY valid JSON, no other text."#,
        pub_count = context.publications.len(),
        org_count = context.orgs.len(),
        problems = context.problems,
        sample = sample.join("\n"),
    )
}

pub fn reading_prompt(topic: &str, background: &str, publication_list: &str) -> String {
    format!(
        r#"You are an AI safety research advisor. Create a structured reading path for someone who wants to learn about: "{topic}"

Their background level: {background}

Available papers in our database (highest cited first):
{publication_list}

Return a JSON response with:
1. "topic": The topic name
2. "overview": 1-2 sentences about what they'll learn
3. "path": An object with:
   - "start_here": Array of 2-3 foundational papers to read first (from the database or well-known papers)
   - "then_read": Array of 3-5 intermediate papers to read next
   - "recent_developments": Array of 2-3 recent papers (2024-2025)
   - "optional_deep_dives": Array of 2-3 advanced papers for those wanting to go deeper
   - "skip_these": Array of 1-2 papers that are outdated or superseded

Each item should have:
- "title": Paper title (prefer exact matches from the database)
- "type": "foundational" | "intermediate" | "advanced" | "recent" | "skip"
- "reason": Why to read/skip this (1 sentence)

4. "time_estimate": How long this reading path takes (e.g., "2-3 weeks for a thorough understanding")

Be practical and helpful. Prioritize papers from our database when relevant.
Adjust recommendations based on their background level.

Return ONLY valid JSON, no other text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_demand_json_only() {
        let itn = ItnContext {
            publications: vec!["\"P\" by O".to_string()],
            orgs: vec!["O (nonprofit): Evals".to_string()],
            problems: "- X (Evals)".to_string(),
        };

        for prompt in [
            search_prompt("interpretability", "DATA"),
            match_prompt("an idea about probes", "INDEX"),
            itn_prompt("Title", "Description", &itn),
            reading_prompt("evals", "beginner", "- \"P\" (O)"),
        ] {
            assert!(prompt.contains("Return ONLY valid JSON"));
        }
    }

    #[test]
    fn test_search_prompt_embeds_query_and_context() {
        let prompt = search_prompt("deceptive alignment", "THE-CONTEXT");
        assert!(prompt.contains("\"deceptive alignment\""));
        assert!(prompt.contains("THE-CONTEXT"));
    }
}
