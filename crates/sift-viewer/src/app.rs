//! The view composition.
//!
//! One [`Viewer`] wires a loaded table into a [`Driver`] whose view function
//! runs the same sequence every pass: slider over the row count, head slice,
//! station select, memoized station subset, toggle, and the toggle message.
//! The session store and the memoized filter outlive each pass; everything
//! else is rebuilt from scratch.

use std::rc::Rc;

use sift_core::{Table, Value};
use sift_runtime::{Binding, Driver, DriverError, Memo, ViewCtx};
use sift_widgets::{Document, SelectBox, Slider, TableView, Text, Toggle};

use crate::error::Result;

/// State key holding the applied row count.
pub const COUNT_KEY: &str = "count";
/// State key the slider itself writes; a callback copies it into `count`.
pub const NEW_COUNT_KEY: &str = "new_count";
/// State key holding the selected station.
pub const STATION_KEY: &str = "station";
/// State key holding the toggle.
pub const SWITCH_KEY: &str = "switch";

/// Initial row count before any interaction.
const DEFAULT_COUNT: i64 = 5;

/// A driver over the trip-data composition plus the handles tests and
/// diagnostics observe.
pub struct Viewer {
    pub driver: Driver<Document>,
    /// Shared handle to the memoized station filter.
    pub station_rides: Memo<Value, Table>,
}

/// Build the viewer for a loaded table.
///
/// Validates `filter_column` up front so the memoized filter is infallible
/// afterwards.
pub fn build(table: Table, filter_column: &str, width: u16) -> Result<Viewer> {
    let filter_idx = table.column_index(filter_column)?;
    let table = Rc::new(table);

    let station_rides = {
        let table = Rc::clone(&table);
        Memo::new(move |station: &Value| table.filter_eq_at(filter_idx, station))
    };

    let driver = {
        let rides = station_rides.clone();
        let column = filter_column.to_owned();
        Driver::new(move |ctx: &mut ViewCtx<'_>| view(ctx, &table, &rides, &column, width))
    };

    Ok(Viewer {
        driver,
        station_rides,
    })
}

fn view(
    ctx: &mut ViewCtx<'_>,
    table: &Rc<Table>,
    rides: &Memo<Value, Table>,
    column: &str,
    width: u16,
) -> sift_runtime::Result<Document> {
    let mut doc = Document::new();
    let row_count = table.row_count() as i64;

    // Row-count slider. The control writes its own key; the callback copies
    // the new value into `count` before the next pass observes it.
    let count = session_i64(ctx, COUNT_KEY)?;
    let new_count = session_i64(ctx, NEW_COUNT_KEY)?;
    ctx.declare(Binding::new(NEW_COUNT_KEY).on_change(|session, value| {
        session.set(COUNT_KEY, value.clone());
    }));
    doc.push(
        &Slider::new("How many rows would you like to see?", NEW_COUNT_KEY)
            .range(1, row_count)
            .value(new_count),
        width,
    );

    let slice = table.head(count.max(0) as usize);
    doc.push(&TableView::new(&slice).max_rows(slice.row_count()), width);

    // Station select over the column's distinct values, seeded with the
    // first option.
    let options = table.distinct(column)?;
    let first = options
        .first()
        .cloned()
        .unwrap_or_else(|| Value::Str(String::new()));
    let selected = ctx.session().get_or_init(STATION_KEY, first);
    ctx.declare(Binding::new(STATION_KEY));
    doc.push(
        &SelectBox::new(
            "Select a start station to get the subset of the data",
            STATION_KEY,
        )
        .options(options)
        .selected(selected.clone()),
        width,
    );

    let subset = rides.call(&selected);
    doc.push(&TableView::new(&subset), width);

    // Toggle and its message.
    let switch = ctx
        .session()
        .get_or_init(SWITCH_KEY, false)
        .as_bool()
        .unwrap_or(false);
    ctx.declare(Binding::new(SWITCH_KEY));
    doc.push(&Toggle::new("On or off?", SWITCH_KEY).on(switch), width);
    doc.push(&Text::new(if switch { "It's on!" } else { "It's off" }), width);

    Ok(doc)
}

fn session_i64(ctx: &mut ViewCtx<'_>, key: &str) -> sift_runtime::Result<i64> {
    ctx.session()
        .get_or_init(key, DEFAULT_COUNT)
        .as_i64()
        .ok_or_else(|| DriverError::view(format!("`{key}` is not numeric")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
