use flavor_menu::clients::MenuClient;
use flavor_menu::config::MenuConfig;
use flavor_menu::dom::build_listing;
use flavor_menu::layout::ColumnLayout;
use flavor_menu::model::{Menu, MenuItem};
use flavor_menu::order::{OrderError, OrderOutcome};
use flavor_menu::page::{MenuError, MenuPage, PageEvent, PageOutcome};
use flavor_menu::quantity::QuantityRange;
use page_runtime::mock::MockHandle;
use page_runtime::RuntimeError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn booted_page() -> MenuPage {
    let menu = Menu::new(vec![
        MenuItem::new("Mint Chip", "Cool.", "$1.45"),
        MenuItem::new("Pistachio", "Nutty.", "$2.25"),
    ]);
    let config = MenuConfig {
        quantity: QuantityRange::new(7, 7).unwrap(),
        ..MenuConfig::default()
    };
    let (page, _) = MenuPage::boot(
        build_listing(&menu).unwrap(),
        &config,
        &mut StdRng::seed_from_u64(0),
        &ColumnLayout::new(2),
    )
    .unwrap();
    page
}

#[tokio::test]
async fn test_favorite_looks_up_card_then_clicks() {
    let page = booted_page();
    let card = page.inventory().element("Pistachio").unwrap();

    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_snapshot().return_ok(page);
    mock.expect_dispatch().return_ok(PageOutcome::Highlight {
        flavor: "Pistachio".into(),
        highlighted: true,
    });

    let client = MenuClient::new(mock.handle());
    assert!(client.favorite("Pistachio").await.unwrap());

    mock.verify();
    assert_eq!(mock.take_events(), vec![PageEvent::Click(card)]);
}

#[tokio::test]
async fn test_favorite_unknown_flavor_sends_no_click() {
    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_snapshot().return_ok(booted_page());

    let client = MenuClient::new(mock.handle());
    assert_eq!(
        client.favorite("Rocky Road").await.unwrap_err(),
        MenuError::Order(OrderError::FlavorNotFound("Rocky Road".into()))
    );

    mock.verify();
    assert!(mock.take_events().is_empty());
}

#[tokio::test]
async fn test_quantity_and_records_read_snapshot() {
    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_snapshot().return_ok(booted_page());
    mock.expect_snapshot().return_ok(booted_page());

    let client = MenuClient::new(mock.handle());
    assert_eq!(client.quantity_of("Mint Chip").await.unwrap(), 7);

    let records = client.records().await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Mint Chip", "Pistachio"]);

    mock.verify();
}

#[tokio::test]
async fn test_submit_passes_outcome_through() {
    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_dispatch().return_ok(PageOutcome::FormUpdated);
    mock.expect_dispatch().return_ok(PageOutcome::FormUpdated);
    mock.expect_dispatch()
        .return_ok(PageOutcome::Order(OrderOutcome::EmptyAmount));

    let client = MenuClient::new(mock.handle());
    client.select_flavor(0).await.unwrap();
    client.enter_amount("").await.unwrap();
    assert_eq!(client.submit().await.unwrap(), OrderOutcome::EmptyAmount);

    mock.verify();
    assert_eq!(
        mock.take_events(),
        vec![
            PageEvent::SelectFlavor(0),
            PageEvent::EnterAmount(String::new()),
            PageEvent::SubmitOrder,
        ]
    );
}

#[tokio::test]
async fn test_wrong_outcome_kind_is_reported() {
    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_dispatch().return_ok(PageOutcome::Ignored);

    let client = MenuClient::new(mock.handle());
    assert!(matches!(
        client.place_order("Mint Chip", "1").await,
        Err(MenuError::Runtime(_))
    ));
}

#[tokio::test]
async fn test_runtime_errors_become_menu_errors() {
    let mut mock = MockHandle::<MenuPage>::new();
    mock.expect_snapshot()
        .return_err(RuntimeError::DispatcherClosed);

    let client = MenuClient::new(mock.handle());
    let err = client.render_html().await.unwrap_err();
    assert_eq!(err, MenuError::Runtime("Dispatcher closed".into()));
}
