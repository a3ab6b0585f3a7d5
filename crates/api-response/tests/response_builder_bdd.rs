//! Behavioural tests for response envelope assembly.
//!
//! These scenarios exercise `build_response` end to end: plain values,
//! invalid records, catalogued errors, unexpected errors and paginated
//! collections.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use api_response::{
    DomainError, Entry, Envelope, ErrorCatalog, ErrorKind, Params, Resource, ResponseConfig,
    Status, build_response,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use test_support::Article;

/// Resource shapes used by the scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    PlainHash,
    BlankName,
    RecordNotFound,
    RuntimeError,
    Articles,
}

impl Subject {
    fn resource(self) -> Resource {
        match self {
            Self::PlainHash => Resource::from(json!({"id": 1})),
            Self::BlankName => Resource::record(Article::rejected(&["name can't be blank"])),
            Self::RecordNotFound => Resource::from(DomainError::record_not_found()),
            Self::RuntimeError => Resource::error("boom"),
            Self::Articles => Resource::collection([
                Entry::record(Article::titled("first")),
                Entry::record(Article::titled("second")),
                Entry::record(Article::titled("third")),
            ]),
        }
    }
}

/// Test world holding the inputs and the built envelopes.
#[derive(Default, ScenarioState)]
struct World {
    subject: Slot<Subject>,
    config: Slot<ResponseConfig>,
    envelope: Slot<Envelope>,
    second_envelope: Slot<Envelope>,
}

impl World {
    fn build(&self) -> Envelope {
        let subject = self.subject.get().expect("subject should be set");
        let config = self.config.get().expect("config should be set");
        build_response(&subject.resource(), &config, &Params::new())
            .expect("pass-through serialisation succeeds")
    }

    fn envelope(&self) -> Envelope {
        self.envelope.get().expect("envelope should be built")
    }

    fn errors(&self) -> Vec<String> {
        self.envelope()
            .errors()
            .expect("failures carry messages")
            .to_vec()
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a plain hash resource")]
fn a_plain_hash_resource(world: &World) {
    world.subject.set(Subject::PlainHash);
}

#[given("a record with a blank name")]
fn a_record_with_a_blank_name(world: &World) {
    world.subject.set(Subject::BlankName);
}

#[given("a record not found error")]
fn a_record_not_found_error(world: &World) {
    world.subject.set(Subject::RecordNotFound);
}

#[given("a runtime error with message boom")]
fn a_runtime_error_with_message_boom(world: &World) {
    world.subject.set(Subject::RuntimeError);
}

#[given("a collection of three articles")]
fn a_collection_of_three_articles(world: &World) {
    world.subject.set(Subject::Articles);
}

#[given("an empty configuration")]
fn an_empty_configuration(world: &World) {
    world.config.set(ResponseConfig::default());
}

#[given("a configuration with count 5 and page 2")]
fn a_configuration_with_count_and_page(world: &World) {
    let config = ResponseConfig::from_options(&json!({"count": 5, "meta": {"page": 2}}))
        .expect("options are well formed");
    world.config.set(config);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the response is built")]
fn the_response_is_built(world: &World) {
    let envelope = world.build();
    world.envelope.set(envelope);
}

#[when("the response is built twice")]
fn the_response_is_built_twice(world: &World) {
    let first = world.build();
    let second = world.build();
    world.envelope.set(first);
    world.second_envelope.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the status is success")]
fn the_status_is_success(world: &World) {
    assert_eq!(world.envelope().status(), Status::Success);
}

#[then("the status is failure")]
fn the_status_is_failure(world: &World) {
    assert_eq!(world.envelope().status(), Status::Failure);
}

#[then("the status code is {code:u16}")]
fn the_status_code_is(world: &World, code: u16) {
    assert_eq!(world.envelope().status_code().as_u16(), code);
}

#[then("the envelope has no messages")]
fn the_envelope_has_no_messages(world: &World) {
    assert!(world.envelope().messages().is_none());
}

#[then("the envelope has no body")]
fn the_envelope_has_no_body(world: &World) {
    assert!(world.envelope().body().is_none());
}

#[then("the body echoes the plain hash")]
fn the_body_echoes_the_plain_hash(world: &World) {
    assert_eq!(world.envelope().body(), Some(&json!({"id": 1})));
}

#[then("the meta is empty")]
fn the_meta_is_empty(world: &World) {
    assert!(world.envelope().meta().is_empty());
}

#[then("the errors are exactly the record errors")]
fn the_errors_are_exactly_the_record_errors(world: &World) {
    assert_eq!(world.errors(), vec!["name can't be blank".to_owned()]);
}

#[then("the errors are the catalogue default for record not found")]
fn the_errors_are_the_catalogue_default(world: &World) {
    let expected = ErrorCatalog::global().message(ErrorKind::RecordNotFound);
    assert_eq!(world.errors(), vec![expected.to_owned()]);
}

#[then("the errors contain only boom")]
fn the_errors_contain_only_boom(world: &World) {
    assert_eq!(world.errors(), vec!["boom".to_owned()]);
}

#[then("the body lists the articles in input order")]
fn the_body_lists_the_articles_in_input_order(world: &World) {
    assert_eq!(
        world.envelope().body(),
        Some(&json!([
            {"title": "first"},
            {"title": "second"},
            {"title": "third"},
        ]))
    );
}

#[then("the meta holds the total count and the page")]
fn the_meta_holds_the_total_count_and_the_page(world: &World) {
    assert_eq!(
        Value::Object(world.envelope().meta().clone()),
        json!({"total_count": 5, "page": 2})
    );
}

#[then("both envelopes are identical")]
fn both_envelopes_are_identical(world: &World) {
    let first = world.envelope();
    let second = world
        .second_envelope
        .get()
        .expect("second envelope should be built");
    assert_eq!(first, second, "envelope assembly should be idempotent");
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Plain value yields a success envelope"
)]
fn plain_value_yields_a_success_envelope(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Invalid record yields a validation failure"
)]
fn invalid_record_yields_a_validation_failure(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Catalogued error keeps its own status"
)]
fn catalogued_error_keeps_its_own_status(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Unexpected error is reported as an internal server error"
)]
fn unexpected_error_is_reported_as_an_internal_server_error(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Paginated collection carries merged metadata"
)]
fn paginated_collection_carries_merged_metadata(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_builder.feature",
    name = "Building twice yields identical envelopes"
)]
fn building_twice_yields_identical_envelopes(world: World) {
    let _ = world;
}
