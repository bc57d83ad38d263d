//! Table Component
//!
//! Generic data table parameterized by a row type and a column list.
//! Columns render cell text through plain function pointers, so tables stay
//! free of business logic and the column definitions are unit testable.

use leptos::*;

/// One table column: a header label and a cell renderer
pub struct Column<T> {
    pub label: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Generic data table
#[component]
pub fn Table<T: Clone + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
) -> impl IntoView {
    let header = columns
        .iter()
        .map(|col| {
            view! {
                <th class="px-6 py-3 text-left text-xs font-medium text-white uppercase tracking-wider">
                    {col.label}
                </th>
            }
        })
        .collect_view();

    let body = rows
        .into_iter()
        .map(|row| {
            let cells = columns
                .iter()
                .map(|col| {
                    view! {
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-200">
                            {(col.cell)(&row)}
                        </td>
                    }
                })
                .collect_view();

            view! {
                <tr class="hover:bg-gray-700/50 transition-colors">{cells}</tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-gray-800 rounded-lg overflow-hidden">
                <thead class="bg-red-700">
                    <tr>{header}</tr>
                </thead>
                <tbody class="divide-y divide-gray-700">{body}</tbody>
            </table>
        </div>
    }
}
