use crate::score::paths;
use crate::types::scoring::ScoringResult;
use crate::types::snapshot::Snapshot;

const RESPONSE_SHAPE: &str = r#"{
  "summary": {
    "summary": "...",
    "strengths": ["...", "...", "..."],
    "weaknesses": ["...", "...", "..."],
    "overallImpression": "..."
  },
  "roadmap": [
    {
      "priority": 1,
      "title": "...",
      "description": "...",
      "why": "...",
      "how": "...",
      "estimatedImpact": 15
    }
  ],
  "recruiterLens": {
    "hireabilityScore": 75,
    "level": "Junior",
    "verdict": "...",
    "redFlags": ["..."],
    "greenFlags": ["..."]
  },
  "skillMap": {
    "detected": ["..."],
    "missing": ["..."]
  }
}"#;

pub fn build_prompt(snapshot: &Snapshot, scoring: &ScoringResult) -> String {
    let repo = &snapshot.repo;
    let languages = snapshot
        .languages
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

    format!(
        "Analyze this GitHub repository and provide:\n\
         \n\
         1. A concise summary (2-3 sentences) of the repository's overall quality\n\
         2. Top 3 strengths\n\
         3. Top 3 weaknesses\n\
         4. A personalized roadmap with 5 actionable items (each with: priority, title, description, why it matters, how to do it, estimated impact 0-100)\n\
         5. Recruiter assessment: hireability score (0-100), level (Intern/Junior/Mid-Level/Senior/Not Ready), verdict, red flags, green flags\n\
         6. Detected skills and missing skills\n\
         \n\
         Repository: {full_name}\n\
         Description: {description}\n\
         Languages: {languages}\n\
         Score: {percentage}/100 ({grade})\n\
         Commits: {commits}\n\
         Has README: {readme}\n\
         Test files: {tests}\n\
         CI/CD: {ci}\n\
         \n\
         Format your response as JSON:\n\
         {shape}",
        full_name = repo.full_name,
        description = repo.description.as_deref().unwrap_or("No description"),
        percentage = scoring.percentage,
        grade = scoring.grade,
        commits = snapshot.commits.len(),
        readme = yes_no(snapshot.has_readme()),
        tests = paths::test_file_count(snapshot),
        ci = yes_no(!snapshot.workflows.is_empty()),
        shape = RESPONSE_SHAPE,
    )
}
