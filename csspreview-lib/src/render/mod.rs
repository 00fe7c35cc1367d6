pub mod preview_html;
