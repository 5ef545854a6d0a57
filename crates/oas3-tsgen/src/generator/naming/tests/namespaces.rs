use crate::generator::{
  GeneratorOptions,
  naming::{model_file, namespace, qualified_name, service_class, simple_name, unqualified_name},
};

#[test]
fn test_namespace() {
  let cases = [
    ("Pet", None),
    ("pets.Pet", Some("pets")),
    ("a.b.Pet", Some("a/b")),
    (".Pet.", None),
    (".pets.Pet", Some("pets")),
  ];
  for (input, expected) in cases {
    assert_eq!(namespace(input).as_deref(), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_simple_name() {
  assert_eq!(simple_name("#/components/schemas/Pet"), "Pet");
  assert_eq!(simple_name("Pet"), "Pet");
}

#[test]
fn test_model_names() {
  let options = GeneratorOptions::default();
  let cases = [
    ("Pet", "Pet", "Pet"),
    ("pets.Pet", "Pet", "PetsPet"),
    ("a.b.Pet", "Pet", "ABPet"),
    ("pet_status", "PetStatus", "PetStatus"),
  ];
  for (input, unqualified, qualified) in cases {
    assert_eq!(unqualified_name(input, &options), unqualified, "failed for input {input:?}");
    assert_eq!(qualified_name(input, &options), qualified, "failed for input {input:?}");
  }
}

#[test]
fn test_model_names_with_affixes() {
  let options = GeneratorOptions::builder().model_prefix("Api").model_suffix("Dto").build();
  assert_eq!(unqualified_name("pets.Pet", &options), "ApiPetDto");
  assert_eq!(qualified_name("pets.Pet", &options), "PetsApiPetDto");
}

#[test]
fn test_model_file() {
  let options = GeneratorOptions::default();
  let cases = [
    ("./", "Pet", "./pet"),
    ("../models/", "pets.Pet", "../models/pets/pet"),
    ("../", "a.b.PetStatus", "../a/b/pet-status"),
    ("../models", "Pet", "../models/pet"),
  ];
  for (dir, name, expected) in cases {
    assert_eq!(model_file(dir, name, &options), expected, "failed for input {name:?} in {dir:?}");
  }
}

#[test]
fn test_service_class() {
  assert_eq!(service_class("pets", &GeneratorOptions::default()), "PetsService");

  let options = GeneratorOptions::builder()
    .service_prefix("My")
    .service_suffix("Client")
    .build();
  assert_eq!(service_class("pet store", &options), "MyPetStoreClient");
}
