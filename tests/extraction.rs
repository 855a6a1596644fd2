//! End-to-end extraction tests: route a URL to its profile, then run the
//! engine over fixture documents. No network involved.

use cigar_scraper::infrastructure::parsing::extract;
use cigar_scraper::infrastructure::routing;
use scraper::Html;

#[test]
fn review_site_document_end_to_end() {
    let profile = routing::select("https://www.cigaraficionado.com/ratings/9876");
    assert_eq!(profile.name, "cigar_aficionado");

    let document = Html::parse_document(
        r#"
        <html><body>
            <h1 class="entry-title">Flor de las Antillas by My Father</h1>
            <div class="cigar-specs">Size: 5.5 x 54</div>
            <p class="review-detail">Strength: medium</p>
            <p class="origin-info">Country: Nicaragua</p>
        </body></html>
        "#,
    );

    let record = extract(&document, profile).expect("record");
    assert_eq!(record.brand.as_deref(), Some("Flor de las Antillas"));
    assert_eq!(record.name.as_deref(), Some("My Father"));
    assert_eq!(record.length.as_deref(), Some("5.5"));
    assert_eq!(record.ring_gauge.as_deref(), Some("54"));
    assert_eq!(record.strength.as_deref(), Some("Medium"));
    assert_eq!(record.origin.as_deref(), Some("Nicaragua"));
}

#[test]
fn label_then_value_markup_sets_strength() {
    let profile = routing::select("https://www.cigarsinternational.com/p/12");
    let document = Html::parse_document(
        r#"
        <html><body>
            <h1>Oliva Serie V Melanio</h1>
            <dl>
                <dt class="spec-name">Strength</dt>
                <dd class="spec-value">Full</dd>
            </dl>
        </body></html>
        "#,
    );

    let record = extract(&document, profile).expect("record");
    assert_eq!(record.strength.as_deref(), Some("Full"));
}

#[test]
fn value_then_label_markup_sets_no_strength() {
    let profile = routing::select("https://www.cigarsinternational.com/p/12");
    let document = Html::parse_document(
        r#"
        <html><body>
            <h1>Oliva Serie V Melanio</h1>
            <dl>
                <dd class="spec-value">Full</dd>
                <dt class="spec-name">Strength</dt>
            </dl>
        </body></html>
        "#,
    );

    let record = extract(&document, profile).expect("record");
    assert_eq!(record.strength, None);
    // the title still came through
    assert_eq!(record.brand.as_deref(), Some("Oliva"));
}

#[test]
fn unknown_host_uses_the_generic_sweep() {
    let profile = routing::select("https://boutique-cigars.example/shop/item/77");
    assert_eq!(profile.name, "generic");

    let document = Html::parse_document(
        r#"
        <html><body>
            <h1>Tatuaje Miami</h1>
            <p>A full flavored cigar, 6 x 52, from a small factory.</p>
        </body></html>
        "#,
    );

    let record = extract(&document, profile).expect("record");
    assert_eq!(record.length.as_deref(), Some("6"));
    assert_eq!(record.ring_gauge.as_deref(), Some("52"));
    assert_eq!(record.strength.as_deref(), Some("Full"));
}

#[test]
fn attribute_free_document_yields_nothing_for_every_profile() {
    let html = "<html><body><table><tr><td>nothing useful</td></tr></table></body></html>";
    for url in [
        "https://www.cigaraficionado.com/x",
        "https://www.famous-smoke.com/x",
        "https://www.cigarsinternational.com/x",
        "https://www.jrcigars.com/x",
        "https://unknown.example/x",
    ] {
        let profile = routing::select(url);
        let document = Html::parse_document(html);
        assert!(
            extract(&document, profile).is_none(),
            "profile {} should extract nothing",
            profile.name
        );
    }
}
