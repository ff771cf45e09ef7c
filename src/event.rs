use crate::model::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SelectionEvent {
    ItemToggled {
        item_id: ItemId,
        selected: bool,
        history_depth: usize,
    },
    UndoApplied {
        history_depth: usize,
    },
    UndoIgnored,
}

impl SelectionEvent {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::ItemToggled {
                item_id,
                selected,
                history_depth,
            } => {
                let action = if *selected { "selected" } else { "deselected" };
                format!("item_toggled item_id={item_id} action={action} depth={history_depth}")
            }
            Self::UndoApplied { history_depth } => {
                format!("undo_applied depth={history_depth}")
            }
            Self::UndoIgnored => "undo_ignored reason=initial_selection".to_string(),
        }
    }

    fn trace(&self) {
        match self {
            Self::ItemToggled {
                item_id,
                selected,
                history_depth,
            } => tracing::info!(item_id, selected, history_depth, "item toggled"),
            Self::UndoApplied { history_depth } => {
                tracing::info!(history_depth, "undo applied")
            }
            Self::UndoIgnored => tracing::warn!("undo ignored at initial selection"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct SelectionLog {
    entries: Vec<SelectionEvent>,
}

impl SelectionLog {
    pub fn entries(&self) -> &[SelectionEvent] {
        &self.entries
    }

    /// Records `event` and emits it as a tracing event.
    pub fn push(&mut self, event: SelectionEvent) {
        event.trace();
        self.entries.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_are_stable() {
        let toggled = SelectionEvent::ItemToggled {
            item_id: 4,
            selected: true,
            history_depth: 2,
        };
        assert_eq!(
            toggled.to_log_line(),
            "item_toggled item_id=4 action=selected depth=2"
        );
        assert_eq!(
            SelectionEvent::UndoApplied { history_depth: 1 }.to_log_line(),
            "undo_applied depth=1"
        );
        assert_eq!(
            SelectionEvent::UndoIgnored.to_log_line(),
            "undo_ignored reason=initial_selection"
        );
    }

    #[test]
    fn events_serialize_with_an_event_tag() {
        let value = serde_json::to_value(SelectionEvent::ItemToggled {
            item_id: 1,
            selected: false,
            history_depth: 3,
        })
        .expect("event should serialize");
        assert_eq!(value["event"], "item_toggled");
        assert_eq!(value["item_id"], 1);
        assert_eq!(value["selected"], false);
    }

    #[test]
    fn log_preserves_push_order() {
        let mut log = SelectionLog::default();
        log.push(SelectionEvent::UndoIgnored);
        log.push(SelectionEvent::UndoApplied { history_depth: 1 });
        assert_eq!(
            log.entries(),
            &[
                SelectionEvent::UndoIgnored,
                SelectionEvent::UndoApplied { history_depth: 1 },
            ]
        );
    }
}
