use dayguide_core::model::GuideDocument;

pub fn print(doc: &GuideDocument) {
    println!("{:<5} {:<12} {:<10} Title", "Day", "Date", "Sections");

    for record in doc.records() {
        let date = record.date.as_deref().unwrap_or("-");
        println!(
            "{:<5} {:<12} {:<10} {}",
            record.day,
            date,
            record.sections.len(),
            record.title
        );
    }

    println!("\n{} day(s) parsed", doc.len());
}
