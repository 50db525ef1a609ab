//! Document rendering: HTML and Markdown from the same sections.
//!
//! DESIGN
//! ======
//! Both documents are rendered here, independently, and shipped in the
//! response side by side. Clients never derive one from the other; they
//! only display or export what arrives pre-built.

use super::types::ContentSections;

/// Render a complete HTML document for the sections.
#[must_use]
pub fn render_html(sections: &ContentSections, title: &str) -> String {
    let features: String =
        sections.features.iter().map(|f| format!("<li>{f}</li>")).collect();
    let benefits: String =
        sections.benefits.iter().map(|b| format!("<li>{b}</li>")).collect();
    let faqs: String = sections
        .faqs
        .iter()
        .map(|faq| {
            format!(
                "<div class=\"faq\"><h3>{}</h3><p>{}</p></div>",
                faq.question, faq.answer
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20   <title>{seo_title}</title>\n\
         \x20   <meta name=\"description\" content=\"{seo_description}\">\n\
         \x20   <meta name=\"keywords\" content=\"{keywords}\">\n\
         </head>\n\
         <body>\n\
         \x20   <header>\n\
         \x20       <h1>{title}</h1>\n\
         \x20   </header>\n\
         \x20   <main>\n\
         \x20       <section class=\"hero\">\n\
         \x20           <p>{hero}</p>\n\
         \x20       </section>\n\
         \x20       <section class=\"features\">\n\
         \x20           <h2>Features</h2>\n\
         \x20           <ul>{features}</ul>\n\
         \x20       </section>\n\
         \x20       <section class=\"benefits\">\n\
         \x20           <h2>Benefits</h2>\n\
         \x20           <ul>{benefits}</ul>\n\
         \x20       </section>\n\
         \x20       <section class=\"cta\">\n\
         \x20           <button>{cta}</button>\n\
         \x20       </section>\n\
         \x20       <section class=\"faqs\">\n\
         \x20           <h2>Frequently Asked Questions</h2>\n\
         \x20           {faqs}\n\
         \x20       </section>\n\
         \x20   </main>\n\
         </body>\n\
         </html>",
        seo_title = sections.seo_meta.title,
        seo_description = sections.seo_meta.description,
        keywords = sections.seo_meta.keywords.join(", "),
        hero = sections.hero_section,
        cta = sections.cta,
    )
}

/// Render a complete Markdown document for the sections.
#[must_use]
pub fn render_markdown(sections: &ContentSections, title: &str) -> String {
    let features: String =
        sections.features.iter().map(|f| format!("- {f}")).collect::<Vec<_>>().join("\n");
    let benefits: String =
        sections.benefits.iter().map(|b| format!("- {b}")).collect::<Vec<_>>().join("\n");
    let faqs: String = sections
        .faqs
        .iter()
        .map(|faq| format!("### {}\n\n{}\n", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {title}\n\
         \n\
         {hero}\n\
         \n\
         ## Features\n\
         \n\
         {features}\n\
         \n\
         ## Benefits\n\
         \n\
         {benefits}\n\
         \n\
         ## Call to Action\n\
         \n\
         {cta}\n\
         \n\
         ## Frequently Asked Questions\n\
         \n\
         {faqs}\n",
        hero = sections.hero_section,
        cta = sections.cta,
    )
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
