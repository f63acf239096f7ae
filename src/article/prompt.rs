use super::types::Section;

/// Talking points requested per section header.
pub const POINTS_PER_SECTION: u32 = 3;

fn count_word(count: u32) -> String {
    const WORDS: [&str; 10] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    match count {
        1..=10 => WORDS[(count - 1) as usize].to_string(),
        other => other.to_string(),
    }
}

pub fn outline_prompt(title: &str, keywords: &[String], tone: &str, sections: u32) -> String {
    format!(
        "Generate {} headers for a technical article titled {} focused on {} with a {} tone",
        count_word(sections),
        title,
        keywords.join(", "),
        tone
    )
}

pub fn talking_points_prompt(header: &str, tone: &str) -> String {
    format!(
        "Generate {} talking points for a section of a technical article titled {} with a {} tone",
        count_word(POINTS_PER_SECTION),
        header,
        tone
    )
}

pub fn paragraph_prompt(point: &str, tone: &str) -> String {
    format!("Generate a four sentence paragraph based on {point} with a {tone} tone")
}

pub fn intro_prompt(title: &str, headers: &[String], tone: &str) -> String {
    format!(
        "Generate a four sentence article introduction paragraph with a {} tone for an article titled \"{}\" with the headers {}",
        tone,
        title,
        headers.join(", ")
    )
}

pub fn conclusion_prompt(title: &str, intro: &str, tone: &str) -> String {
    format!(
        "Generate a four sentence section conclusion paragraph with a {} tone for an article titled {} with the introduction paragraph: {}",
        tone,
        title,
        intro.trim()
    )
}

/// One clause per section, in order, followed by the introduction/conclusion framing.
pub fn article_prompt(title: &str, sections: &[Section], tone: &str) -> String {
    let mut prompt = format!(
        "Write a technical article titled {title} with a {tone} tone. Start with an introduction paragraph."
    );

    for section in sections {
        prompt.push_str(&format!(
            " Then write a section titled \"{}\" that covers {}.",
            section.header,
            section.points.join("; ")
        ));
    }

    prompt.push_str(" Finish with a conclusion paragraph. Do not repeat sentences.");
    prompt
}
