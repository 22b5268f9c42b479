//! Performance benchmarks for link-metadata.
//!
//! Run with: `cargo bench`

use std::fmt::Write as _;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use link_metadata::{extract_with_options, Options};

const URL: &str = "https://example.com/2024/01/15/sample-article";

const RICH_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article | Example News</title>
    <meta property="og:title" content="Sample Article">
    <meta property="article:published_time" content="2024-01-15T10:30:00Z">
    <script type="application/ld+json">
    {"@type": "NewsArticle", "headline": "Sample Article", "datePublished": "2024-01-15T10:30:00Z"}
    </script>
</head>
<body>
    <article>
        <h1>Sample Article</h1>
        <time datetime="2024-01-15">January 15, 2024</time>
        <p>First paragraph of the article.</p>
    </article>
</body>
</html>
"#;

/// A page with no metadata at all, padded to `paragraphs` paragraphs, so
/// every step of both cascades runs to the URL fallbacks.
fn bare_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..paragraphs {
        let _ = write!(html, "<p>Paragraph {i} with plain words and no dates.</p>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_extraction(c: &mut Criterion) {
    let options = Options {
        reference_date: NaiveDate::from_ymd_opt(2024, 1, 1),
    };

    c.bench_function("rich_metadata", |b| {
        b.iter(|| extract_with_options(black_box(RICH_HTML), black_box(URL), &options));
    });

    let mut group = c.benchmark_group("full_cascade");
    for paragraphs in [10, 100, 1000] {
        let html = bare_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract_with_options(black_box(html), black_box(URL), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
