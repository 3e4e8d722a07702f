use model::{
    core::field_type::FieldType,
    search::{definition::SearchDefinition, field::Field},
};
use search_syntax::OperatorKind;

/// Search definition over an `issues` table used across the unit tests.
///
/// | name        | type      | notes                                   |
/// |-------------|-----------|-----------------------------------------|
/// | title       | string    |                                         |
/// | description | text      |                                         |
/// | status      | string    | default operator `=`                    |
/// | priority    | integer   |                                         |
/// | created_at  | timestamp |                                         |
/// | due_on      | date      |                                         |
/// | reporter    | string    | `users.login`, alias `author`, explicit |
pub fn issues() -> SearchDefinition {
    SearchDefinition::builder("issues")
        .field(Field::new("title", FieldType::String))
        .field(Field::new("description", FieldType::Text))
        .field(Field::new("status", FieldType::String).with_default_operator(OperatorKind::Eq))
        .field(Field::new("priority", FieldType::Integer))
        .field(Field::new("created_at", FieldType::Timestamp))
        .field(Field::new("due_on", FieldType::Date))
        .field(
            Field::new("reporter", FieldType::String)
                .with_table("users")
                .with_column("login")
                .with_alias("author")
                .only_explicit(),
        )
        .build()
        .unwrap()
}
