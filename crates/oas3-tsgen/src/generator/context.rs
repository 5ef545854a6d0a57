use crate::generator::{
  GeneratorOptions,
  description::ApiDescription,
  metrics::{GenerationStats, GenerationWarning},
  resolver::ReferenceResolver,
  type_synth::TypeSynthesizer,
};

/// State threaded through every build phase: the description, the options and the running stats.
#[derive(Debug)]
pub struct BuildContext<'a> {
  description: &'a ApiDescription,
  options: &'a GeneratorOptions,
  stats: GenerationStats,
}

impl<'a> BuildContext<'a> {
  #[must_use]
  pub fn new(description: &'a ApiDescription, options: &'a GeneratorOptions) -> Self {
    Self {
      description,
      options,
      stats: GenerationStats::default(),
    }
  }

  #[must_use]
  pub fn description(&self) -> &'a ApiDescription {
    self.description
  }

  #[must_use]
  pub fn options(&self) -> &'a GeneratorOptions {
    self.options
  }

  #[must_use]
  pub fn resolver(&self) -> ReferenceResolver<'a> {
    self.description.resolver()
  }

  #[must_use]
  pub fn synthesizer(&self) -> TypeSynthesizer<'a> {
    TypeSynthesizer::new(self.options)
  }

  pub fn stats_mut(&mut self) -> &mut GenerationStats {
    &mut self.stats
  }

  pub fn warn(&mut self, warning: GenerationWarning) {
    self.stats.record_warning(warning);
  }

  #[must_use]
  pub fn into_stats(self) -> GenerationStats {
    self.stats
  }
}
