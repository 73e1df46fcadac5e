use serde::Serialize;

use crate::models::{Advance, BusinessProfile, ConversationState, Intent};

/// Canned texts of the demo dialogue.
#[derive(Debug, Clone, Serialize)]
pub struct DemoScript {
    pub greeting: String,
    pub ask_name: String,
    pub ask_hours: String,
    pub ask_services: String,
    pub setup_done: String,
    pub ask_day: String,
    pub idle_fallback: String,
    pub completed_fallback: String,
    pub upsell_items: Vec<String>,
    pub price_line: String,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            greeting: "Hola, soy Nordia.\nPuedo ayudarte a configurar un negocio o mostrarte un ejemplo.\n\nEscribí: setup".to_string(),
            ask_name: "Perfecto. ¿Cómo se llama tu negocio?".to_string(),
            ask_hours: "Bien. ¿Qué horarios tenés?".to_string(),
            ask_services: "¿Qué servicios ofrecés?".to_string(),
            setup_done: "Listo. Negocio configurado.\nProbá escribir: servicios o turno".to_string(),
            ask_day: "¿Para qué día querés el turno?".to_string(),
            idle_fallback: "No entendí. Escribí 'setup' para empezar.".to_string(),
            completed_fallback: "No entendí. Probá escribir: servicios o turno".to_string(),
            upsell_items: vec!["Corte premium".to_string(), "Afeitado".to_string()],
            price_line: "Precio desde $8.500".to_string(),
        }
    }
}

impl DemoScript {
    fn services_reply(&self, profile: &BusinessProfile) -> String {
        let mut reply = format!("Servicios de {}:\n- {}", profile.name, profile.services);
        for item in &self.upsell_items {
            reply.push_str("\n- ");
            reply.push_str(item);
        }
        reply.push_str("\n\n");
        reply.push_str(&self.price_line);
        reply
    }
}

/// Trim and lowercase. Only used for matching, never stored.
pub fn normalize(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

pub fn classify(normalized: &str) -> Intent {
    if normalized == "setup" {
        Intent::Setup
    } else if normalized.contains("servicio") {
        Intent::Services
    } else if normalized.contains("turno") {
        Intent::Appointment
    } else {
        Intent::Other
    }
}

/// Runs one step of the scripted dialogue. Every input gets a reply.
pub fn advance(
    script: &DemoScript,
    state: ConversationState,
    profile: &BusinessProfile,
    raw_input: &str,
) -> Advance {
    let intent = classify(&normalize(raw_input));
    let advance = transition(script, state, profile.clone(), intent, raw_input);

    tracing::debug!(
        from = state.as_str(),
        to = advance.state.as_str(),
        intent = ?intent,
        "demo conversation step"
    );

    advance
}

fn transition(
    script: &DemoScript,
    state: ConversationState,
    mut profile: BusinessProfile,
    intent: Intent,
    raw_input: &str,
) -> Advance {
    let (next, reply) = match (state, intent) {
        (ConversationState::Idle, Intent::Setup) => {
            (ConversationState::CollectingName, script.ask_name.clone())
        }
        (ConversationState::Idle, _) => (ConversationState::Idle, script.idle_fallback.clone()),

        // Collecting states store the raw text whatever it classifies as.
        (ConversationState::CollectingName, _) => {
            profile.name = raw_input.to_string();
            (ConversationState::CollectingHours, script.ask_hours.clone())
        }
        (ConversationState::CollectingHours, _) => {
            profile.hours = raw_input.to_string();
            (ConversationState::CollectingServices, script.ask_services.clone())
        }
        (ConversationState::CollectingServices, _) => {
            profile.services = raw_input.to_string();
            (ConversationState::Completed, script.setup_done.clone())
        }

        (ConversationState::Completed, Intent::Services) => {
            (ConversationState::Completed, script.services_reply(&profile))
        }
        // Dead end: there is no state that captures the requested day.
        (ConversationState::Completed, Intent::Appointment) => {
            (ConversationState::Completed, script.ask_day.clone())
        }
        (ConversationState::Completed, _) => {
            (ConversationState::Completed, script.completed_fallback.clone())
        }
    };

    Advance {
        state: next,
        profile,
        reply,
    }
}
