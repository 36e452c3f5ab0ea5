//! Print document assembly
//!
//! A print batch is one self-contained HTML document: print CSS in the
//! head, one rendered block per slip in the body.

const PRINT_STYLE: &str = r#"
  @media print {
    .receipt {
      width: 320px !important;
      margin: 0 auto !important;
      font-family: Verdana, sans-serif !important;
    }
    .receipt div[style*="display:flex"] {
      display: flex !important;
      justify-content: space-between !important;
      margin: 5px 0 !important;
      font-size: 12px !important;
    }
    .receipt div[style*="display:flex"] span {
      display: inline-block !important;
      white-space: nowrap !important;
    }
    .receipt div[style*="margin:5px 0"] {
      page-break-inside: avoid !important;
      break-inside: avoid !important;
    }
  }
"#;

/// Wrap rendered slip blocks into a single printable HTML document.
pub fn print_document(blocks: &[String]) -> String {
    let mut doc = String::with_capacity(256 + blocks.iter().map(String::len).sum::<usize>());
    doc.push_str("<html>\n<head>\n<title>Generated Receipts</title>\n<style>");
    doc.push_str(PRINT_STYLE);
    doc.push_str("</style>\n</head>\n<body>\n");
    for block in blocks {
        doc.push_str(block);
        doc.push('\n');
    }
    doc.push_str("</body></html>");
    doc
}
