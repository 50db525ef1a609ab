//! Prompt construction for the model provider.

use content::ContentRequest;

/// Build the generation prompt from a brief and retrieved knowledge.
#[must_use]
pub fn build_prompt(request: &ContentRequest, context: &[String]) -> String {
    let context_text = if context.is_empty() {
        "No specific context available.".to_owned()
    } else {
        context.iter().map(|c| format!("- {c}")).collect::<Vec<_>>().join("\n")
    };

    let content_type = request.content_type.as_str();
    format!(
        "You are an expert content creator specializing in {content_type} creation.\n\
         \n\
         Task: Generate comprehensive, engaging content for a {content_type} about: {title}\n\
         \n\
         Product/Service Description:\n\
         {description}\n\
         \n\
         Relevant Context from Knowledge Base:\n\
         {context_text}\n\
         \n\
         Requirements:\n\
         1. Tone: {tone}\n\
         2. Language: {language}\n\
         3. Content Type: {content_type}\n\
         \n\
         Generate the following sections in JSON format:\n\
         \n\
         {{\n\
         \x20 \"hero_section\": \"A compelling hero message (2-3 sentences)\",\n\
         \x20 \"features\": [\"Feature 1\", \"Feature 2\", \"Feature 3\", \"Feature 4\"],\n\
         \x20 \"benefits\": [\"Benefit 1\", \"Benefit 2\", \"Benefit 3\"],\n\
         \x20 \"seo_meta\": {{\n\
         \x20   \"title\": \"SEO optimized title (60 chars max)\",\n\
         \x20   \"description\": \"SEO meta description (160 chars max)\",\n\
         \x20   \"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\", \"keyword4\", \"keyword5\"]\n\
         \x20 }},\n\
         \x20 \"cta\": \"Clear call-to-action message\",\n\
         \x20 \"faqs\": [\n\
         \x20   {{\"question\": \"Question 1\", \"answer\": \"Answer 1\"}},\n\
         \x20   {{\"question\": \"Question 2\", \"answer\": \"Answer 2\"}},\n\
         \x20   {{\"question\": \"Question 3\", \"answer\": \"Answer 3\"}}\n\
         \x20 ]\n\
         }}\n\
         \n\
         Ensure all content:\n\
         - Is engaging and conversion-focused\n\
         - Maintains the specified tone\n\
         - Is in {language}\n\
         - Is original and compelling\n\
         \n\
         Return ONLY valid JSON, no additional text.",
        title = request.title,
        description = request.description,
        tone = request.tone.as_str(),
        language = request.language.as_str(),
    )
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
