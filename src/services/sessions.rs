use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::models::{BusinessProfile, ConversationState, DemoSession, Message, Role};
use crate::services::conversation::{self, DemoScript};

/// In-memory demo sessions. Nothing here survives a restart.
pub struct SessionStore {
    script: DemoScript,
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, DemoSession>>,
}

#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub session: DemoSession,
    /// `None` when the message was blank and nothing was processed.
    pub reply: Option<String>,
}

impl SessionStore {
    pub fn new(script: DemoScript, ttl_minutes: i64) -> Self {
        Self {
            script,
            ttl: Duration::minutes(ttl_minutes.max(1)),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn create(&self) -> DemoSession {
        let now = Utc::now().naive_utc();
        self.sweep_expired_at(now);

        let session = new_session(&self.script, now, self.ttl);
        tracing::info!(session = %session.id, "demo session created");

        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: &Uuid) -> Option<DemoSession> {
        let now = Utc::now().naive_utc();
        let sessions = self.sessions.lock().unwrap();
        sessions.get(id).filter(|s| s.expires_at > now).cloned()
    }

    /// Appends the user's text and the engine's reply to the transcript.
    /// Blank text is ignored, the way the chat input ignores an empty send.
    pub fn send(&self, id: &Uuid, text: &str) -> Option<SendOutcome> {
        let now = Utc::now().naive_utc();
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(id).filter(|s| s.expires_at > now)?;

        if text.trim().is_empty() {
            return Some(SendOutcome {
                session: session.clone(),
                reply: None,
            });
        }

        session.transcript.push(Message::new(Role::User, text));
        let step = conversation::advance(&self.script, session.state, &session.profile, text);

        tracing::info!(
            session = %id,
            from = session.state.as_str(),
            to = step.state.as_str(),
            "demo message processed"
        );

        session.state = step.state;
        session.profile = step.profile;
        session.transcript.push(Message::new(Role::Bot, step.reply.clone()));
        session.last_activity = now;
        session.expires_at = now + self.ttl;

        Some(SendOutcome {
            session: session.clone(),
            reply: Some(step.reply),
        })
    }

    /// Back to `idle` with an empty profile and only the greeting.
    pub fn reset(&self, id: &Uuid) -> Option<DemoSession> {
        let now = Utc::now().naive_utc();
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(id).filter(|s| s.expires_at > now)?;

        session.state = ConversationState::Idle;
        session.profile = BusinessProfile::default();
        session.transcript = vec![Message::new(Role::Bot, self.script.greeting.clone())];
        session.last_activity = now;
        session.expires_at = now + self.ttl;

        tracing::info!(session = %id, "demo session reset");
        Some(session.clone())
    }

    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now().naive_utc())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sweep_expired_at(&self, now: NaiveDateTime) -> usize {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, "expired demo sessions swept");
        }
        removed
    }
}

fn new_session(script: &DemoScript, now: NaiveDateTime, ttl: Duration) -> DemoSession {
    DemoSession {
        id: Uuid::new_v4(),
        state: ConversationState::Idle,
        profile: BusinessProfile::default(),
        transcript: vec![Message::new(Role::Bot, script.greeting.clone())],
        created_at: now,
        last_activity: now,
        expires_at: now + ttl,
    }
}
