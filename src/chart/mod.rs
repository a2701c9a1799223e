//! Visualizer: merged series → interactive plotly line chart.

use crate::models::record::{AttendanceRecord, Origin};
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

const CHART_TITLE: &str = "Workshop Attendance Over Time";
const X_LABEL: &str = "Workshop Date";
const Y_LABEL: &str = "Attendance Count";

/// Build the chart: one lines+markers trace per origin present in the
/// series. Absent counts become `null` y-values, which plotly renders as
/// gaps in the line.
pub fn render(records: &[AttendanceRecord]) -> Plot {
    let mut plot = Plot::new();

    for origin in [Origin::Local, Origin::Web] {
        let (x, y) = series_for(records, origin);
        if x.is_empty() {
            continue;
        }

        let trace = Scatter::new(x, y)
            .mode(Mode::LinesMarkers)
            .name(origin.label());
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::new(CHART_TITLE))
        .x_axis(Axis::new().title(Title::new(X_LABEL)))
        .y_axis(Axis::new().title(Title::new(Y_LABEL)));
    plot.set_layout(layout);

    plot
}

/// Open the chart in the default browser. Blocking side effect, no output.
pub fn show(records: &[AttendanceRecord]) {
    render(records).show();
}

fn series_for(records: &[AttendanceRecord], origin: Origin) -> (Vec<String>, Vec<Option<u32>>) {
    records
        .iter()
        .filter(|r| r.origin == origin)
        .map(|r| (r.date_str(), r.count))
        .unzip()
}
