mod identifiers;
mod namespaces;
