use crate::models::video::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Summarize,
    DetailedAnalyze,
}

/// Headers the detailed analysis must contain, in this order. The front end
/// styles the response by looking for them.
pub const DETAILED_SECTION_MARKERS: [&str; 4] = [
    "## 1. Sentiment Analysis",
    "## 2. Comment Categories",
    "## 3. Top Discussed Topics",
    "## 4. Engagement Score",
];

pub const COMMENT_CATEGORIES: [&str; 5] = ["FAQ", "Praise", "Criticism", "Questions", "Suggestions"];

const SUMMARY_PREAMBLE: &str = "Analyze and summarize the following YouTube comments. \
Write a comprehensive summary that covers the main points viewers raise, the overall \
sentiment, and any recurring themes or notable feedback. Use a few short paragraphs \
followed by bullet points for the key takeaways. Format the whole answer in Markdown.";

pub fn build_prompt(mode: PromptMode, comments: &[Comment]) -> String {
    let preamble = match mode {
        PromptMode::Summarize => SUMMARY_PREAMBLE.to_string(),
        PromptMode::DetailedAnalyze => detailed_preamble(),
    };

    let body = comments
        .iter()
        .map(|comment| comment.text.as_str())
        .collect::<Vec<&str>>()
        .join("\n");

    format!("{}\n\nComments:\n{}", preamble, body)
}

fn detailed_preamble() -> String {
    let categories = COMMENT_CATEGORIES
        .iter()
        .map(|category| format!("{}:", category))
        .collect::<Vec<String>>()
        .join(", ");

    format!(
        "Perform a detailed analysis of the following YouTube comments. \
Your answer must be Markdown and must contain all four sections below, in this order, \
each starting with exactly the header shown.\n\n\
{}\nAnalyze the sentiment and emotions expressed. Give a labeled score for each of \
Positive, Negative and Neutral as a percentage of comments.\n\n\
{}\nSort the comments into these categories, each on its own line starting with the \
label: {}. List representative points under each label.\n\n\
{}\nName the top 3 most discussed topics and briefly explain each one.\n\n\
{}\nRate viewer engagement on a scale of 1-10, considering likes, the depth of \
discussion and the quality of interaction. State the score as \"Score: N/10\" and \
justify it.",
        DETAILED_SECTION_MARKERS[0],
        DETAILED_SECTION_MARKERS[1],
        categories,
        DETAILED_SECTION_MARKERS[2],
        DETAILED_SECTION_MARKERS[3],
    )
}
