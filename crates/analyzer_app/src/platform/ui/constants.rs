pub const BRAND: &str = "Research Hub AI";
pub const ANALYZER_HEADING: &str = "Search Papers";
pub const QUERY_HINT: &str = "Enter research topic (e.g., 'Generative AI in Medicine')...";
pub const NO_RESULTS: &str = "No papers found for this topic.";
pub const LINK_LABEL: &str = "Read Paper";
pub const FOOTER: &str = "Research Hub AI. Open Source for Science.";

pub const HELP: &[&str] = &[
    "<topic>                 analyze papers on a topic",
    ":tab [card] <category>  switch a card's tab (name, key or 1-8)",
    ":home  :analyze         switch page",
    ":help                   show this help",
    ":quit                   exit",
];
