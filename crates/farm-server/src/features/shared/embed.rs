//! Related rows folded into a parent row as JSONB
//!
//! Reads return each record with the rows it points at, one level deep:
//! a sale carries its buyer, point of contact and animal, a butcher record
//! its animal, a contact its sales. Nested records leave out their own
//! relations, except that an animal always carries its feed.
//!
//! Each function returns a scalar subquery for a select list. The argument
//! is the qualified column of the outer row, e.g. `sells.livestock_id`.

/// A feed with its linked livestock ids, shaped like `Feed`
pub fn feed(feed_id: &str) -> String {
    format!(
        "(SELECT to_jsonb(f) || jsonb_build_object('livestock_ids', \
           ARRAY(SELECT fl.id FROM livestock fl WHERE fl.feed_id = f.id ORDER BY fl.created_at)) \
         FROM feeds f WHERE f.id = {})",
        feed_id
    )
}

/// An animal with its feed, shaped like `Livestock`
pub fn livestock(livestock_id: &str) -> String {
    format!(
        "(SELECT to_jsonb(l) || jsonb_build_object('feed', {}) \
         FROM livestock l WHERE l.id = {})",
        feed("l.feed_id"),
        livestock_id
    )
}

pub fn contact(contact_id: &str) -> String {
    format!("(SELECT to_jsonb(c) FROM contacts c WHERE c.id = {})", contact_id)
}

/// Sales whose `column` equals `contact_id`, newest first. Never NULL.
pub fn sells(column: &str, contact_id: &str) -> String {
    format!(
        "COALESCE((SELECT jsonb_agg(to_jsonb(s) ORDER BY s.created_at DESC, s.id) \
         FROM sells s WHERE s.{} = {}), '[]'::jsonb)",
        column, contact_id
    )
}
