use crate::models::Submission;

/// Plaintext body for the new-task notification email.
///
/// The layout is deterministic: id header, task block, location block,
/// customer block, photo list, submission timestamp.
pub fn render_task_received(s: &Submission) -> String {
    let file_list = if s.files.is_empty() {
        "None".to_string()
    } else {
        s.files
            .iter()
            .map(|f| format!("• {} ({} KB)", f.original_name, round_kb(f.size_bytes)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "New TaskAid task received ({id})\n\
         \n\
         Category: {category}\n\
         Title: {title}\n\
         Description: {description}\n\
         \n\
         Location: {suburb} {postcode}\n\
         Address: {address}\n\
         Timing: {timing}\n\
         Budget: {budget}\n\
         \n\
         Customer:\n\
         Name: {name}\n\
         Mobile: {mobile}\n\
         Email: {email}\n\
         Preferred contact: {contact_pref}\n\
         \n\
         Photos:\n\
         {file_list}\n\
         \n\
         Submitted at: {created_at}\n",
        id = s.id,
        category = s.category,
        title = s.title,
        description = s.description,
        suburb = s.suburb,
        postcode = s.postcode,
        address = or_not_provided(&s.address),
        timing = s.timing,
        budget = or_not_provided(&s.budget),
        name = s.name,
        mobile = s.mobile,
        email = s.email,
        contact_pref = s.contact_pref,
        file_list = file_list,
        created_at = s.created_at,
    )
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() {
        "(not provided)"
    } else {
        value
    }
}

fn round_kb(size_bytes: u64) -> u64 {
    (size_bytes as f64 / 1024.0).round() as u64
}
