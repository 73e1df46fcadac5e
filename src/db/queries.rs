use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::models::Lead;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Leads ──

pub fn insert_lead(conn: &Connection, lead: &Lead) -> anyhow::Result<()> {
    let created_at = lead.created_at.format(TIMESTAMP_FORMAT).to_string();

    conn.execute(
        "INSERT INTO leads (id, name, email, phone, message, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            lead.id,
            lead.name,
            lead.email,
            lead.phone,
            lead.message,
            lead.source,
            created_at,
        ],
    )?;
    Ok(())
}

pub fn get_lead(conn: &Connection, id: &str) -> anyhow::Result<Option<Lead>> {
    let lead = conn
        .query_row(
            "SELECT id, name, email, phone, message, source, created_at FROM leads WHERE id = ?1",
            params![id],
            parse_lead_row,
        )
        .optional()?;
    Ok(lead)
}

pub fn list_leads(conn: &Connection, limit: i64) -> anyhow::Result<Vec<Lead>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, message, source, created_at
         FROM leads ORDER BY created_at DESC, rowid DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], parse_lead_row)?;

    let mut leads = vec![];
    for row in rows {
        leads.push(row?);
    }
    Ok(leads)
}

fn parse_lead_row(row: &rusqlite::Row) -> rusqlite::Result<Lead> {
    let created_at: String = row.get(6)?;
    Ok(Lead {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        source: row.get(5)?,
        created_at: NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
            .unwrap_or_default(),
    })
}

// ── Analytics ──

pub fn insert_analytics_event(
    conn: &Connection,
    client_id: &str,
    name: &str,
    params: &serde_json::Value,
) -> anyhow::Result<i64> {
    let params_json = serde_json::to_string(params)?;
    conn.execute(
        "INSERT INTO analytics_events (client_id, name, params) VALUES (?1, ?2, ?3)",
        params![client_id, name, params_json],
    )?;
    Ok(conn.last_insert_rowid())
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCount {
    pub name: String,
    pub count: i64,
}

pub fn count_events_by_name(conn: &Connection) -> anyhow::Result<Vec<EventCount>> {
    let mut stmt = conn.prepare(
        "SELECT name, COUNT(*) FROM analytics_events GROUP BY name ORDER BY COUNT(*) DESC, name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(EventCount {
            name: row.get(0)?,
            count: row.get(1)?,
        })
    })?;

    let mut counts = vec![];
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}
