//! Standalone Leaflet page rendering.
//!
//! Turns a [`MapView`] into a self-contained HTML document: Leaflet 1.9.4
//! from a CDN, the serialized view embedded as data, and a short script that
//! draws tile layer, markers, popups and the dashed route line from it. The
//! page adds no information of its own; everything visible comes from the
//! composition.

use crate::application::render_map::dto::MapView;
use lazy_static::lazy_static;

/// Leaflet 1.9.4, pinned.
const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="sv">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>
  <link rel="stylesheet" href="__LEAFLET_CSS__" crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="__LEAFLET_JS__" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>
    body { margin: 0; font-family: system-ui, sans-serif; }
    #map { height: 100vh; width: 100%; }
  </style>
__ICON_ASSETS__
</head>
<body>
  <div id="map"></div>
  <script>
    const view = __VIEW_JSON__;

    const map = L.map('map', {
      center: [view.center.lat, view.center.lng],
      zoom: view.zoom,
      scrollWheelZoom: view.scroll_wheel_zoom
    });

    L.tileLayer(view.tile_layer.url_template, {
      attribution: view.tile_layer.attribution
    }).addTo(map);

    const popupNode = (popup) => {
      const root = document.createElement('div');
      const title = document.createElement('strong');
      title.textContent = popup.title;
      root.appendChild(title);
      popup.lines.forEach((line) => {
        root.appendChild(document.createElement('br'));
        root.appendChild(document.createTextNode(line));
      });
      return root;
    };

    const addMarker = (m) => {
      L.marker([m.position.lat, m.position.lng], { icon: dotIcon(m.color) })
        .addTo(map)
        .bindPopup(popupNode(m.popup));
    };

    addMarker(view.home_marker);
    view.job_markers.forEach(addMarker);

    if (view.route_line) {
      L.polyline(view.route_line.points.map((p) => [p.lat, p.lng]), {
        color: view.route_line.color,
        weight: view.route_line.weight,
        opacity: view.route_line.opacity,
        dashArray: view.route_line.dash_array
      }).addTo(map);
    }
  </script>
</body>
</html>
"#;

lazy_static! {
    /// Marker icon assets, assembled once per process. Every page render and
    /// every component instance shares this block; touching it again is a
    /// no-op read.
    static ref ICON_ASSETS: String = build_icon_assets();
}

/// The shared marker icon stylesheet and icon factory.
pub fn icon_assets() -> &'static str {
    &ICON_ASSETS
}

fn build_icon_assets() -> String {
    concat!(
        "  <style>\n",
        "    .dot-marker {\n",
        "      width: 100%;\n",
        "      height: 100%;\n",
        "      box-sizing: border-box;\n",
        "      border-radius: 50%;\n",
        "      border: 3px solid #fff;\n",
        "      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.3);\n",
        "    }\n",
        "  </style>\n",
        "  <script>\n",
        "    const dotIcon = (color) => L.divIcon({\n",
        "      className: '',\n",
        "      html: '<div class=\"dot-marker\" style=\"background-color: ' + color + '\"></div>',\n",
        "      iconSize: [20, 20],\n",
        "      iconAnchor: [10, 10]\n",
        "    });\n",
        "  </script>"
    )
    .to_string()
}

/// Render a [`MapView`] into a complete HTML document.
pub fn render_page(view: &MapView, title: &str) -> String {
    let view_json = embed_json(view);
    PAGE_TEMPLATE
        .replacen("__TITLE__", &escape_html(title), 1)
        .replacen("__LEAFLET_CSS__", LEAFLET_CSS, 1)
        .replacen("__LEAFLET_JS__", LEAFLET_JS, 1)
        .replacen("__ICON_ASSETS__", icon_assets(), 1)
        .replacen("__VIEW_JSON__", &view_json, 1)
}

/// Serialize for embedding inside a `<script>` block. `<` is escaped so
/// address text can never terminate the script element.
fn embed_json(view: &MapView) -> String {
    serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
