//! Plain-text exports for pasting into a chat app.
//!
//! Both renderers are pure. Handing the text to a share sheet or clipboard is
//! the caller's business.

use crate::category::CategoryRegistry;
use crate::item::ShoppingItem;
use crate::projection;
use crate::session::SessionState;
use chrono::{Datelike, NaiveDate, Weekday};

pub const EMPTY_FULL_LIST: &str = "まだレギュラーメンバーが登録されていません。";
pub const EMPTY_SESSION_LIST: &str =
    "買い物リストが空です。\nアイテムをチェックするか、在庫がないとマークしてください。";
pub const CONDITION_NOTE: &str = "💡条件: 安い方を買う";

fn weekday_ja(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

/// Long Japanese date, e.g. `2024年1月15日月曜日`.
pub fn format_date_ja(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日{}",
        date.year(),
        date.month(),
        date.day(),
        weekday_ja(date.weekday())
    )
}

/// The whole list, grouped by aisle, with tag and condition annotations.
///
/// The `合計` line counts rendered rows, so items in unregistered categories
/// are not included in it.
pub fn render_full_list(
    registry: &CategoryRegistry,
    items: &[ShoppingItem],
    today: NaiveDate,
) -> String {
    if items.is_empty() {
        return EMPTY_FULL_LIST.to_string();
    }

    let mut text = format!("🛒 レギュラーメンバー（{}）\n\n", format_date_ja(today));
    let mut total = 0usize;

    for group in projection::project(registry, items, &SessionState::new()) {
        text.push_str(&format!("【{}】\n", group.category.label));
        for row in &group.items {
            text.push('・');
            text.push_str(&row.display_name);
            for tag in &row.tags {
                text.push(' ');
                text.push_str(tag.label());
            }
            if row.has_condition {
                text.push(' ');
                text.push_str(CONDITION_NOTE);
            }
            text.push('\n');
            total += 1;
        }
        text.push('\n');
    }

    text.push_str(&format!("合計: {total}品\n"));
    text.push_str("いつものお買い物リストです！");
    text
}

/// Just the names to buy this trip, one per line, in list order.
pub fn render_session_list(items: &[ShoppingItem], session: &SessionState) -> String {
    let lines: Vec<&str> = items
        .iter()
        .filter(|item| session.needs_purchase(item))
        .map(|item| item.name.as_str())
        .collect();

    if lines.is_empty() {
        return EMPTY_SESSION_LIST.to_string();
    }
    lines.join("\n")
}
