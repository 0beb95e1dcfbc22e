//! GPX 1.1 generation from a telemetry record.
//!
//! Builds the track-log XML dialect consumed by fitness platforms: one
//! `<trkpt>` per sample with elevation, RFC 3339 time, and Garmin
//! TrackPointExtension heart-rate and cadence elements.

use time::format_description::well_known::Rfc3339;

use telemetry::TelemetryRecord;

/// Generates a GPX 1.1 XML document from an assembled record.
pub fn generate_gpx(record: &TelemetryRecord, name: &str, activity_type: &str) -> String {
    let mut gpx = String::new();

    gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    gpx.push('\n');
    gpx.push_str(r#"<gpx version="1.1" creator="gpxgen""#);
    gpx.push_str(r#" xmlns="http://www.topografix.com/GPX/1/1""#);
    gpx.push_str(r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#);
    gpx.push_str(r#" xmlns:ns3="http://www.garmin.com/xmlschemas/TrackPointExtension/v1""#);
    gpx.push_str(r#" xsi:schemaLocation="http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd">"#);
    gpx.push('\n');

    gpx.push_str("  <metadata>\n");
    if let Some(start) = record.timestamps.first() {
        let formatted = start.format(&Rfc3339).unwrap_or_default();
        gpx.push_str(&format!("    <time>{formatted}</time>\n"));
    }
    gpx.push_str("  </metadata>\n");

    gpx.push_str("  <trk>\n");
    gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(name)));
    gpx.push_str(&format!(
        "    <type>{}</type>\n",
        escape_xml(activity_type)
    ));
    gpx.push_str("    <trkseg>\n");

    for (i, point) in record.route.iter().enumerate() {
        gpx.push_str(&format!(
            r#"      <trkpt lat="{:.7}" lon="{:.7}">"#,
            point.lat, point.lon
        ));
        gpx.push('\n');
        gpx.push_str(&format!("        <ele>{:.2}</ele>\n", point.elevation));

        if let Some(ts) = record.timestamps.get(i) {
            let formatted = ts.format(&Rfc3339).unwrap_or_default();
            gpx.push_str(&format!("        <time>{formatted}</time>\n"));
        }

        gpx.push_str("        <extensions>\n");
        gpx.push_str("          <ns3:TrackPointExtension>\n");
        if let Some(hr) = record.heart_rate.get(i) {
            gpx.push_str(&format!("            <ns3:hr>{hr}</ns3:hr>\n"));
        }
        if let Some(cad) = record.cadence.get(i) {
            gpx.push_str(&format!("            <ns3:cad>{cad}</ns3:cad>\n"));
        }
        gpx.push_str("          </ns3:TrackPointExtension>\n");
        gpx.push_str("        </extensions>\n");

        gpx.push_str("      </trkpt>\n");
    }

    gpx.push_str("    </trkseg>\n");
    gpx.push_str("  </trk>\n");
    gpx.push_str("</gpx>\n");

    gpx
}

/// Escapes XML special characters in a string.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
