use datagrid::editor::{
    Editor, EditorInput, FilterEditor, VALUE_NOT_A_NUMBER, VALUE_REQUIRED,
};
use datagrid::filter::{Filter, FilterFieldDescriptor, NumberLookup};

#[test]
fn test_number_editor_empty_value_submits_zero() {
    let editor = Editor::open(FilterFieldDescriptor::number("price", "Price"));
    assert_eq!(editor.submit(), Ok(Filter::gte("price", 0.0)));
}

#[test]
fn test_number_editor_operator_and_value() {
    let editor = Editor::open(FilterFieldDescriptor::number("price", "Price"));
    editor.input(EditorInput::Operator(NumberLookup::LessOrEqual)).unwrap();
    editor.input(EditorInput::Text(" 12.5 ".into())).unwrap();
    assert_eq!(editor.submit(), Ok(Filter::lte("price", 12.5)));
}

#[test]
fn test_number_editor_rejects_non_numeric_text() {
    let editor = Editor::open(FilterFieldDescriptor::number("price", "Price"));
    editor.input(EditorInput::Text("12abc".into())).unwrap();

    let result = editor.submit().unwrap_err();
    assert_eq!(result.first_error().unwrap().message, VALUE_NOT_A_NUMBER);

    let value = &editor.fields()[1];
    assert_eq!(value.value, "12abc");
    assert_eq!(value.error.as_deref(), Some(VALUE_NOT_A_NUMBER));
}

#[test]
fn test_untouched_boolean_editor_submits_true() {
    let editor = Editor::open(FilterFieldDescriptor::boolean("in_stock", "In stock"));
    assert_eq!(editor.submit(), Ok(Filter::exact("in_stock", true)));
}

#[test]
fn test_boolean_editor_answer_no() {
    let editor = Editor::open(FilterFieldDescriptor::boolean("in_stock", "In stock"));
    editor.input(EditorInput::Answer(false)).unwrap();
    assert_eq!(editor.submit(), Ok(Filter::exact("in_stock", false)));
}

#[test]
fn test_char_editor_requires_value() {
    let editor = Editor::open(FilterFieldDescriptor::char("title", "Title"));
    editor.input(EditorInput::Text("   ".into())).unwrap();

    let result = editor.submit().unwrap_err();
    assert!(result.is_invalid());
    assert_eq!(editor.fields()[0].error.as_deref(), Some(VALUE_REQUIRED));

    editor.input(EditorInput::Text("cats".into())).unwrap();
    assert_eq!(editor.fields()[0].error, None);
    assert_eq!(editor.submit(), Ok(Filter::contains("title", "cats")));
}
