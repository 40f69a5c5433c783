//! Search and replace text for the background services in `public/electron.js`.

use crate::diff::Substitution;

/// Default target, relative to the working directory
pub const DEFAULT_TARGET: &str = "public/electron.js";

const PRIMARY_SEARCH: &str = "// Background intelligence services
function initializeBackgroundServices() {
  console.log('🚀 Inicializando servicios de inteligencia en segundo plano...');

  // Start autonomous learning and improvement cycles
  setInterval(() => {
    // Simulate autonomous learning processes
    console.log('🧠 Proceso de aprendizaje autónomo ejecutándose...');
  }, 300000); // Every 5 minutes

  // Start intelligent monitoring
  setInterval(() => {
    // Simulate system monitoring and optimization
    console.log('⚡ Monitoreo inteligente del sistema...');
  }, 600000); // Every 10 minutes";

const PRIMARY_REPLACE: &str = "// Background intelligence services
function initializeBackgroundServices() {
  if (isDev) {
    console.log('🚀 Inicializando servicios de inteligencia en segundo plano...');
  }

  // Start autonomous learning and improvement cycles
  setInterval(() => {
    // Simulate autonomous learning processes
    if (isDev) {
      console.log('🧠 Proceso de aprendizaje autónomo ejecutándose...');
    }
  }, 300000); // Every 5 minutes

  // Start intelligent monitoring
  setInterval(() => {
    // Simulate system monitoring and optimization
    if (isDev) {
      console.log('⚡ Monitoreo inteligente del sistema...');
    }
  }, 600000); // Every 10 minutes";

/// The whole `initializeBackgroundServices` prologue
pub const PRIMARY: Substitution<'static> = Substitution::new(PRIMARY_SEARCH, PRIMARY_REPLACE);

/// Single-line guards, in the order they are applied
pub const FALLBACKS: [Substitution<'static>; 3] = [
    Substitution::new(
        "console.log('🚀 Inicializando servicios de inteligencia en segundo plano...');",
        "if (isDev) { console.log('🚀 Inicializando servicios de inteligencia en segundo plano...'); }",
    ),
    Substitution::new(
        "console.log('🧠 Proceso de aprendizaje autónomo ejecutándose...');",
        "if (isDev) { console.log('🧠 Proceso de aprendizaje autónomo ejecutándose...'); }",
    ),
    Substitution::new(
        "console.log('⚡ Monitoreo inteligente del sistema...');",
        "if (isDev) { console.log('⚡ Monitoreo inteligente del sistema...'); }",
    ),
];
