use crate::storage::{Link, ScanEvent};
use migration::entities::{link, scan_event};

/// Convert a SeaORM Model into a Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        slug: model.slug,
        label: model.label,
        destination: model.destination,
        owner_id: model.owner_id,
        created_at: model.created_at,
    }
}

/// Convert a Link into an ActiveModel for insertion
pub fn link_to_active_model(link: &Link) -> link::ActiveModel {
    use sea_orm::ActiveValue::Set;

    link::ActiveModel {
        id: Set(link.id.clone()),
        slug: Set(link.slug.clone()),
        label: Set(link.label.clone()),
        destination: Set(link.destination.clone()),
        owner_id: Set(link.owner_id.clone()),
        created_at: Set(link.created_at),
    }
}

/// Convert a SeaORM Model into a ScanEvent
pub fn model_to_scan_event(model: scan_event::Model) -> ScanEvent {
    ScanEvent {
        id: model.id,
        link_id: model.link_id,
        created_at: model.created_at,
        ip: model.ip,
        user_agent: model.user_agent,
        referer: model.referer,
    }
}

/// Convert a ScanEvent into an ActiveModel for insertion
pub fn scan_event_to_active_model(event: &ScanEvent) -> scan_event::ActiveModel {
    use sea_orm::ActiveValue::Set;

    scan_event::ActiveModel {
        id: Set(event.id.clone()),
        link_id: Set(event.link_id.clone()),
        created_at: Set(event.created_at),
        ip: Set(event.ip.clone()),
        user_agent: Set(event.user_agent.clone()),
        referer: Set(event.referer.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::ActiveValue;

    fn sample_model() -> link::Model {
        link::Model {
            id: "11111111-2222-3333-4444-555555555555".to_string(),
            slug: "abc123de".to_string(),
            label: "Blog".to_string(),
            destination: "https://example.com/blog".to_string(),
            owner_id: "user-1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_link() {
        let model = sample_model();
        let expected_slug = model.slug.clone();
        let expected_destination = model.destination.clone();

        let link = model_to_link(model);

        assert_eq!(link.slug, expected_slug);
        assert_eq!(link.destination, expected_destination);
        assert_eq!(link.owner_id, "user-1");
    }

    #[test]
    fn test_link_roundtrip() {
        let link = model_to_link(sample_model());
        let active_model = link_to_active_model(&link);

        assert!(matches!(active_model.id, ActiveValue::Set(_)));
        if let ActiveValue::Set(slug) = active_model.slug {
            assert_eq!(slug, link.slug);
        }
        if let ActiveValue::Set(destination) = active_model.destination {
            assert_eq!(destination, link.destination);
        }
    }

    #[test]
    fn test_scan_event_none_fields_survive() {
        let event = ScanEvent {
            id: "scan-1".to_string(),
            link_id: "link-1".to_string(),
            created_at: Utc::now(),
            ip: None,
            user_agent: None,
            referer: None,
        };

        let active_model = scan_event_to_active_model(&event);

        if let ActiveValue::Set(ip) = active_model.ip {
            assert!(ip.is_none());
        }
        if let ActiveValue::Set(ua) = active_model.user_agent {
            assert!(ua.is_none());
        }
    }
}
