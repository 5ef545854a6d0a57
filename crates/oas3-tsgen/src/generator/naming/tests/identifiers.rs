use crate::generator::{
  EnumStyle,
  naming::{
    basic_chars, enum_member_name, escape_identifier, file_name, method_name, quoted, split_words, type_name,
  },
};

#[test]
fn test_basic_chars() {
  let cases = [
    ("pet store", false, "pet_store"),
    ("/pets/{id}.get", false, "_pets_id_get"),
    ("café", false, "cafe"),
    ("123abc", false, "123abc"),
    ("123abc", true, "_123abc"),
    ("  trimmed  ", false, "trimmed"),
  ];
  for (input, guard, expected) in cases {
    assert_eq!(basic_chars(input, guard), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_split_words() {
  let cases: [(&str, &[&str]); 5] = [
    ("XMLParser", &["XML", "Parser"]),
    ("petId2", &["pet", "Id", "2"]),
    ("snake_case-and space", &["snake", "case", "and", "space"]),
    ("getHTTPResponse", &["get", "HTTP", "Response"]),
    ("", &[]),
  ];
  for (input, expected) in cases {
    assert_eq!(split_words(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_method_names() {
  let cases = [
    ("getUserById", "getUserById"),
    ("list-pets", "listPets"),
    ("/pets/{id}.get", "petsIdGet"),
    ("123abc", "123Abc"),
    ("XMLHttpRequest", "xmlHttpRequest"),
    ("café au lait", "cafeAuLait"),
    ("SHOUTING_CASE", "shoutingCase"),
  ];
  for (input, expected) in cases {
    assert_eq!(method_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_type_names() {
  let cases = [
    ("pet store", "PetStore"),
    ("user_profile", "UserProfile"),
    ("v2Api", "V2Api"),
    ("Pet", "Pet"),
    ("", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(type_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_file_names() {
  let cases = [
    ("PetStore", "pet-store"),
    ("XMLParser", "xml-parser"),
    ("PetsService", "pets-service"),
    ("My.Model", "my-model"),
    ("HTTPStatusCode", "http-status-code"),
    ("v2_api", "v-2-api"),
  ];
  for (input, expected) in cases {
    assert_eq!(file_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_enum_member_names() {
  let cases = [
    ("in progress", EnumStyle::Upper, "IN_PROGRESS"),
    ("in progress", EnumStyle::Pascal, "InProgress"),
    ("done", EnumStyle::Alias, "Done"),
    ("1st", EnumStyle::Pascal, "$1St"),
    ("1st", EnumStyle::Upper, "$1_ST"),
    ("", EnumStyle::Pascal, "Empty"),
    ("", EnumStyle::Upper, "EMPTY"),
    ("XMLParser", EnumStyle::Upper, "XML_PARSER"),
    ("XMLParser", EnumStyle::Pascal, "XmlParser"),
    ("already-kebab", EnumStyle::Upper, "ALREADY_KEBAB"),
  ];
  for (input, style, expected) in cases {
    assert_eq!(
      enum_member_name(input, style),
      expected,
      "failed for input {input:?} with {style}"
    );
  }
}

#[test]
fn test_escape_identifier() {
  let cases = [
    ("name", "name"),
    ("snake_case", "snake_case"),
    ("a", "'a'"),
    ("x-trace", "'x-trace'"),
    ("_id", "'_id'"),
    ("it's", r"'it\'s'"),
  ];
  for (input, expected) in cases {
    assert_eq!(escape_identifier(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_quoted_literals() {
  let cases = [
    ("plain", "'plain'"),
    ("a'b", r"'a\'b'"),
    ("back\\slash", r"'back\\slash'"),
    ("line\n", r"'line\n'"),
    ("é", r"'\u00E9'"),
  ];
  for (input, expected) in cases {
    assert_eq!(quoted(input), expected, "failed for input {input:?}");
  }
}
