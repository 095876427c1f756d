use dayguide_core::error::GuideError;
use dayguide_core::parsing::SECTION_LABELS;

pub fn run() -> Result<(), GuideError> {
    println!("Known section labels, in guide order:\n");
    for label in SECTION_LABELS {
        println!("  {label}");
    }
    Ok(())
}
