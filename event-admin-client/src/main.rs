use std::io::{BufRead, Write};

use event_admin_client::{
    EventAdminClient,
    form::{PasswordGate, TEXT_FIELDS},
    panel::{AdminPanel, Notification, SubmitOutcome},
};

fn prompt(label: &str) -> Option<String> {
    print!("{}: ", label);
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn confirm(label: &str, default: bool) -> Option<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = prompt(&format!("{} {}", label, hint))?;
    Some(match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

fn show_notifications(notifications: Vec<Notification>) {
    for notification in notifications {
        match notification {
            Notification::Success(msg) => println!("[ok] {}", msg),
            Notification::Error(msg) => println!("[error] {}", msg),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let api_url = std::env::var("API_URL").expect("API_URL must be set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

    let mut panel = AdminPanel::new(EventAdminClient::new(api_url), PasswordGate::new(password));

    println!("Admin Panel - Add an Event");
    panel.load_categories().await;
    show_notifications(panel.take_notifications());
    if !panel.categories().is_empty() {
        println!("Categories:");
        for category in panel.categories() {
            println!("  {:>4}  {}", category.id, category.name);
        }
    }

    loop {
        println!("Press Enter to keep the current value.");
        for (name, label) in TEXT_FIELDS {
            let current = panel.form.field(name).unwrap_or_default().to_string();
            let Some(value) = prompt(&format!("{} [{}]", label, current)) else {
                return;
            };
            if !value.is_empty() {
                panel.form.set_field(name, value);
            }
        }
        let Some(promoted) = confirm("Do you want to promote?", panel.form.is_checked) else {
            return;
        };
        panel.form.set_promoted(promoted);

        panel.request_submit();
        let Some(password) = prompt("Password") else {
            panel.cancel_submit();
            return;
        };
        let outcome = panel.confirm_submit(&password).await;
        show_notifications(panel.take_notifications());

        let again = match outcome {
            SubmitOutcome::Created { .. } => confirm("Add another event?", false),
            _ => confirm("Try again?", true),
        };
        if again != Some(true) {
            return;
        }
    }
}
