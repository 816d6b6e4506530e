//! Turns a topic's authored items into the list that is actually rendered.

use serde::Serialize;

use campus_core::model::{ItemId, ItemKind, LearningItem};

/// A rendered item: either authored, or synthesized for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    item: LearningItem,
    synthetic: bool,
}

impl DisplayItem {
    #[must_use]
    pub fn authored(item: LearningItem) -> Self {
        Self {
            item,
            synthetic: false,
        }
    }

    #[must_use]
    pub fn synthetic(item: LearningItem) -> Self {
        Self {
            item,
            synthetic: true,
        }
    }

    #[must_use]
    pub fn item(&self) -> &LearningItem {
        &self.item
    }

    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    #[must_use]
    pub fn into_item(self) -> LearningItem {
        self.item
    }
}

/// Anything the expander can read: raw items or its own output.
pub trait ExpandSource {
    fn learning_item(&self) -> &LearningItem;

    fn is_synthetic(&self) -> bool {
        false
    }
}

impl ExpandSource for LearningItem {
    fn learning_item(&self) -> &LearningItem {
        self
    }
}

impl ExpandSource for DisplayItem {
    fn learning_item(&self) -> &LearningItem {
        &self.item
    }

    fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// Insert a synthetic recording right after every completed live class.
///
/// Single stable pass. A live class already followed by its synthetic
/// recording is left alone, so feeding the output back in changes nothing.
/// Authored items are never mistaken for a derived recording, whatever their id.
#[must_use]
pub fn expand_items<T: ExpandSource>(items: &[T]) -> Vec<DisplayItem> {
    let mut out = Vec::with_capacity(items.len());
    for (idx, source) in items.iter().enumerate() {
        let item = source.learning_item();
        out.push(DisplayItem {
            item: item.clone(),
            synthetic: source.is_synthetic(),
        });

        if item.kind() != ItemKind::LiveClass || !item.is_completed() {
            continue;
        }
        let recording_id = ItemId::recording_of(item.id());
        let already_expanded = items.get(idx + 1).is_some_and(|next| {
            next.is_synthetic() && next.learning_item().id() == &recording_id
        });
        if !already_expanded {
            out.push(DisplayItem::synthetic(item.recording_of()));
        }
    }
    out
}

/// "X of Y completed" over the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TopicProgress {
    pub completed: usize,
    pub total: usize,
}

impl TopicProgress {
    #[must_use]
    pub fn of(items: &[DisplayItem]) -> Self {
        Self {
            completed: items.iter().filter(|d| d.item().is_completed()).count(),
            total: items.len(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::{CompletionStatus, LearningItemDraft};

    fn build(id: &str, kind: ItemKind, status: CompletionStatus) -> LearningItem {
        LearningItemDraft::new(id, kind, format!("Title {id}"))
            .status(status)
            .duration("90 min")
            .validate()
            .unwrap()
    }

    fn ids(items: &[DisplayItem]) -> Vec<&str> {
        items.iter().map(|d| d.item().id().as_str()).collect()
    }

    #[test]
    fn inserts_recording_after_completed_live_class() {
        let raw = vec![
            build("lc", ItemKind::LiveClass, CompletionStatus::Completed),
            build("v", ItemKind::Video, CompletionStatus::NotStarted),
        ];
        let out = expand_items(&raw);

        assert_eq!(ids(&out), ["lc", "lc-recording", "v"]);
        let rec = &out[1];
        assert!(rec.is_synthetic());
        assert_eq!(rec.item().kind(), ItemKind::Recording);
        assert_eq!(rec.item().status(), CompletionStatus::Completed);
        assert_eq!(rec.item().title(), "Title lc");
        assert_eq!(rec.item().duration(), Some("90 min"));
        assert!(!out[0].is_synthetic());
        assert!(!out[2].is_synthetic());
    }

    #[test]
    fn pending_live_class_is_not_expanded() {
        let raw = vec![
            build("lc", ItemKind::LiveClass, CompletionStatus::InProgress),
            build("a", ItemKind::Article, CompletionStatus::Completed),
        ];
        assert_eq!(ids(&expand_items(&raw)), ["lc", "a"]);
    }

    #[test]
    fn expansion_is_idempotent() {
        let raw = vec![
            build("a", ItemKind::LiveClass, CompletionStatus::Completed),
            build("b", ItemKind::Assignment, CompletionStatus::NotStarted),
            build("c", ItemKind::LiveClass, CompletionStatus::Completed),
        ];
        let once = expand_items(&raw);
        let twice = expand_items(&once);

        assert_eq!(ids(&once), ["a", "a-recording", "b", "c", "c-recording"]);
        assert_eq!(once, twice);
        assert_eq!(twice.iter().filter(|d| d.is_synthetic()).count(), 2);
    }

    #[test]
    fn authored_item_with_recording_id_does_not_suppress_expansion() {
        let raw = vec![
            build("lc", ItemKind::LiveClass, CompletionStatus::Completed),
            build("lc-recording", ItemKind::Video, CompletionStatus::NotStarted),
        ];
        let out = expand_items(&raw);

        let shape: Vec<(&str, bool, ItemKind)> = out
            .iter()
            .map(|d| (d.item().id().as_str(), d.is_synthetic(), d.item().kind()))
            .collect();
        assert_eq!(
            shape,
            [
                ("lc", false, ItemKind::LiveClass),
                ("lc-recording", true, ItemKind::Recording),
                ("lc-recording", false, ItemKind::Video),
            ]
        );
        assert_eq!(expand_items(&out), out);
    }

    #[test]
    fn synthetic_recordings_never_expand() {
        let raw = vec![build("lc", ItemKind::LiveClass, CompletionStatus::Completed)];
        let once = expand_items(&raw);
        let only_recording = expand_items(&once[1..]);
        assert_eq!(ids(&only_recording), ["lc-recording"]);
    }

    #[test]
    fn empty_topic_expands_to_nothing() {
        let raw: Vec<LearningItem> = Vec::new();
        assert!(expand_items(&raw).is_empty());
    }

    #[test]
    fn progress_counts_rendered_items() {
        let raw = vec![
            build("lc", ItemKind::LiveClass, CompletionStatus::Completed),
            build("v", ItemKind::Video, CompletionStatus::InProgress),
        ];
        let progress = TopicProgress::of(&expand_items(&raw));
        assert_eq!(progress, TopicProgress { completed: 2, total: 3 });
        assert_eq!(progress.label(), "2 of 3 completed");
    }
}
