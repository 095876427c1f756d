use dayguide_core::error::GuideError;
use dayguide_core::model::GuideDocument;

pub fn print(doc: &GuideDocument) -> Result<(), GuideError> {
    let json = serde_json::to_string_pretty(doc)?;
    println!("{json}");
    Ok(())
}
