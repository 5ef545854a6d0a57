mod imports;
mod pruner;
mod resolver;
mod support;
