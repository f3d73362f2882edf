use crate::error::Result;
use crate::style::{known_languages, CommentStyle};

/// Run the languages subcommand
pub fn languages(json: bool) -> Result<()> {
    let languages = known_languages();

    if json {
        let entries: Vec<_> = languages
            .iter()
            .map(|(id, style)| serde_json::json!({ "language": id, "style": style }))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        println!("{}", json);
        return Ok(());
    }

    for (id, style) in &languages {
        println!("{:<18} {}", id, style);
    }
    println!("{:<18} {}", "(other)", CommentStyle::default());
    Ok(())
}
