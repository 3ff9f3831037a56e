use drug_finder::{find_drugs_in_text, DrugRecord};

fn main() {
    env_logger::init();

    let records = vec![
        DrugRecord {
            drugbank_id: "DB00602".to_string(),
            name: "Ivermectin".to_string(),
            synonyms: vec!["Ivermectina".to_string()],
            products: vec!["Stromectol".to_string()],
            ..Default::default()
        },
        DrugRecord {
            drugbank_id: "DB00316".to_string(),
            name: "Acetaminophen".to_string(),
            synonyms: vec!["Paracetamol".to_string()],
            products: vec!["Tylenol".to_string()],
            ..Default::default()
        },
    ];

    let text = "Ivermectin for Severe COVID-19 Management, with paracetamol as needed";

    let groups = find_drugs_in_text(text, records).unwrap();

    println!("Extracted drugs for the given text \"{}\"", text);
    for group in groups {
        let candidate = group.top();
        println!(
            "{}..{} {:?} -> {} ({}): {:.2}",
            candidate.start,
            candidate.end,
            candidate.ngram,
            candidate.record_id,
            candidate.data.name,
            candidate.similarity
        );
    }
}
