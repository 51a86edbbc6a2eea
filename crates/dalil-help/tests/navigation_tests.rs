//! Integration tests for section dispatch and tab navigation

use dalil_help::{
    ContentBlock, ContentDescriptor, Navigator, NestedTabId, SectionId, SupportBody, TabId,
};
use dalil_i18n::Translator;

fn support() -> SectionId {
    SectionId::from("technical-support")
}

#[test]
fn test_initial_navigator_state() {
    let navigator = Navigator::new();
    assert_eq!(navigator.active_tab(), TabId::Faq);
    assert_eq!(navigator.active_nested_tab(), NestedTabId::Overview);
}

#[test]
fn test_select_chat() {
    let mut navigator = Navigator::new();
    navigator.select_tab(TabId::Chat);

    let descriptor = navigator.render(&support(), &Translator::builtin("fr"));
    assert_eq!(descriptor.block(), Some(ContentBlock::Chat));

    let tabs = descriptor.tabs().unwrap();
    let active: Vec<_> = tabs.tabs.iter().filter(|tab| tab.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, TabId::Chat);
    assert_eq!(active[0].label, "Chat Support");

    assert_eq!(navigator.active_nested_tab(), NestedTabId::Overview);
}

#[test]
fn test_api_doc_nested_under_technical_doc() {
    let mut navigator = Navigator::new();
    navigator.select_tab(TabId::TechnicalDoc);
    navigator.select_nested_tab(NestedTabId::ApiDoc);

    let descriptor = navigator.render(&support(), &Translator::builtin("en"));
    match descriptor {
        ContentDescriptor::TechnicalSupport {
            tabs,
            body: SupportBody::TechnicalDoc { tabs: nested, block },
            ..
        } => {
            assert_eq!(tabs.active(), Some(TabId::TechnicalDoc));
            assert_eq!(nested.active(), Some(NestedTabId::ApiDoc));
            assert_eq!(nested.tabs.len(), 3);
            assert_eq!(block, ContentBlock::ApiDocumentation);
        }
        other => panic!("Expected technical documentation, got {:?}", other),
    }
}

#[test]
fn test_nested_selection_hidden_until_technical_doc() {
    let mut navigator = Navigator::new();
    navigator.select_nested_tab(NestedTabId::Deployment);

    let descriptor = navigator.render(&support(), &Translator::builtin("en"));
    assert_eq!(descriptor.block(), Some(ContentBlock::Faq));
    assert!(descriptor.nested_tabs().is_none());

    navigator.select_tab(TabId::TechnicalDoc);
    let descriptor = navigator.render(&support(), &Translator::builtin("en"));
    assert_eq!(descriptor.block(), Some(ContentBlock::DeploymentGuide));
}

#[test]
fn test_about_and_contact_ignore_tab_state() {
    let translator = Translator::builtin("ar");
    let fresh = Navigator::new();
    let about = fresh.render(&SectionId::from("about"), &translator);
    let contact = fresh.render(&SectionId::from("contact"), &translator);

    let mut moved = Navigator::new();
    moved.select_tab(TabId::TechnicalDoc);
    moved.select_nested_tab(NestedTabId::Deployment);

    assert_eq!(moved.render(&SectionId::from("about"), &translator), about);
    assert_eq!(moved.render(&SectionId::from("contact"), &translator), contact);
    assert_eq!(about.header().unwrap().title, "حول");
    assert_eq!(contact.block(), Some(ContentBlock::Contact));
}

#[test]
fn test_unknown_section_placeholder() {
    let navigator = Navigator::new();
    let descriptor = navigator.render(
        &SectionId::from("unknown-section-id"),
        &Translator::builtin("en"),
    );

    assert!(descriptor.is_not_found());
    assert_eq!(descriptor.block(), None);
    assert_eq!(
        descriptor,
        ContentDescriptor::NotFound {
            section: "unknown-section-id".to_string(),
            message: "Section not found".to_string(),
        }
    );
}

#[test]
fn test_repeated_select_tab() {
    let mut navigator = Navigator::new();
    navigator.select_tab(TabId::VideoTutorials);
    let before = navigator.clone();

    navigator.select_tab(TabId::VideoTutorials);
    navigator.select_tab(TabId::VideoTutorials);
    assert_eq!(navigator, before);
}

#[test]
fn test_descriptor_json_shape() {
    let mut navigator = Navigator::new();
    navigator.select_tab(TabId::TechnicalDoc);

    let descriptor = navigator.render(&support(), &Translator::builtin("en"));
    let json = serde_json::to_value(&descriptor).unwrap();

    assert_eq!(json["kind"], "technical-support");
    assert_eq!(json["body"]["kind"], "technical-doc");
    assert_eq!(json["body"]["block"], "technical-specification");
    assert_eq!(json["tabs"]["tabs"][5]["id"], "technical-doc");
    assert_eq!(json["tabs"]["tabs"][5]["active"], true);

    let parsed: ContentDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, descriptor);
}
