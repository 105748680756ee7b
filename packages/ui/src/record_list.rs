//! Swipeable record rows and the visited-date list.
//!
//! Each row slides on pointer drag: right reveals the edit action, left the
//! delete action. Release past the threshold snaps the row fully open,
//! anything less snaps it shut. A tap on an open row closes it.

use dioxus::prelude::*;
use model::format::{format_amount, format_list_date};
use model::{Record, RecordRow};

/// How far a row slides open, in px.
const ACTION_WIDTH: f64 = 80.0;
/// Drag distance past which a release snaps open.
const SNAP_THRESHOLD: f64 = 40.0;
/// Pointer travel before a gesture counts as a drag rather than a tap.
const TAP_SLOP: f64 = 4.0;

/// Clamp an in-progress drag to one action width either side.
fn clamp_offset(offset: f64) -> f64 {
    offset.clamp(-ACTION_WIDTH, ACTION_WIDTH)
}

/// Where a released row settles.
fn snap_offset(offset: f64) -> f64 {
    if offset <= -SNAP_THRESHOLD {
        -ACTION_WIDTH
    } else if offset >= SNAP_THRESHOLD {
        ACTION_WIDTH
    } else {
        0.0
    }
}

/// One swipeable record row.
#[component]
pub fn SwipeRow(
    record: Record,
    on_edit: EventHandler<Record>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut offset = use_signal(|| 0.0f64);
    // (pointer x, offset when the drag began)
    let mut drag = use_signal(|| Option::<(f64, f64)>::None);
    let mut dragged = use_signal(|| false);

    let edit_record = record.clone();
    let delete_id = record.id.clone();
    let menus = record.menus.join(",");

    let onpointerdown = move |evt: Event<PointerData>| {
        drag.set(Some((evt.data().client_coordinates().x, offset())));
        dragged.set(false);
    };
    let onpointermove = move |evt: Event<PointerData>| {
        if let Some((start_x, start_offset)) = drag() {
            let delta = evt.data().client_coordinates().x - start_x;
            if delta.abs() > TAP_SLOP {
                dragged.set(true);
            }
            offset.set(clamp_offset(start_offset + delta));
        }
    };
    let mut release = move || {
        if drag().is_some() {
            offset.set(snap_offset(offset()));
            drag.set(None);
        }
    };
    let onclick = move |_| {
        if dragged() {
            dragged.set(false);
        } else if offset() != 0.0 {
            offset.set(0.0);
        }
    };

    rsx! {
        div { class: "swipe-row",
            div { class: "swipe-underlay",
                button {
                    class: "swipe-edit",
                    onclick: move |_| on_edit.call(edit_record.clone()),
                    "수정"
                }
                button {
                    class: "swipe-delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "삭제"
                }
            }
            div {
                class: "swipe-content",
                style: "transform: translateX({offset()}px);",
                onpointerdown: onpointerdown,
                onpointermove: onpointermove,
                onpointerup: move |_| release(),
                onpointercancel: move |_| release(),
                onclick: onclick,
                div { class: "record-main",
                    div { class: "record-date", {format_list_date(record.visited_at)} }
                    div { class: "record-place", "{record.place_name}" }
                    if !menus.is_empty() {
                        div { class: "record-menus", "{menus}" }
                    }
                    div { class: "record-amount", {format_amount(record.amount)} " 원" }
                }
                div { class: "record-side",
                    span { class: "record-star", "★" }
                    span { class: "record-score", "{record.score} / 5" }
                }
            }
        }
    }
}

/// The visited-date list: newest first, with a load-more row when older
/// records remain.
#[component]
pub fn RecordList(
    rows: Vec<RecordRow>,
    on_edit: EventHandler<Record>,
    on_delete: EventHandler<String>,
    on_load_more: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "record-list",
            for row in rows {
                {match row {
                    RecordRow::Entry(record) => rsx! {
                        SwipeRow {
                            key: "{record.id}",
                            record: record.clone(),
                            on_edit,
                            on_delete,
                        }
                    },
                    RecordRow::LoadMore => rsx! {
                        button {
                            class: "load-more",
                            onclick: move |_| on_load_more.call(()),
                            "더보기"
                        }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_stays_within_action_width() {
        assert_eq!(clamp_offset(300.0), ACTION_WIDTH);
        assert_eq!(clamp_offset(-300.0), -ACTION_WIDTH);
        assert_eq!(clamp_offset(12.5), 12.5);
    }

    #[test]
    fn test_snap_opens_past_threshold() {
        assert_eq!(snap_offset(SNAP_THRESHOLD), ACTION_WIDTH);
        assert_eq!(snap_offset(79.0), ACTION_WIDTH);
        assert_eq!(snap_offset(-SNAP_THRESHOLD), -ACTION_WIDTH);
        assert_eq!(snap_offset(-55.0), -ACTION_WIDTH);
    }

    #[test]
    fn test_snap_closes_under_threshold() {
        assert_eq!(snap_offset(0.0), 0.0);
        assert_eq!(snap_offset(39.9), 0.0);
        assert_eq!(snap_offset(-39.9), 0.0);
    }
}
