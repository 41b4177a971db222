// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Recency window applied to every research prompt.
pub const RECENCY_INSTRUCTION: &str = "\
    Priorize informações publicadas nos **últimos 6-12 meses**. \
    Ao pesar fontes conflitantes, a mais RECENTE prevalece.";

/// The model returns plain labelled text; symbols for the score are rendered by the caller.
pub const NO_EMOJI_INSTRUCTION: &str = "\
    Não use emojis de arco-íris nem outros símbolos comemorativos para a pontuação. \
    Forneça apenas a pontuação numérica, a justificativa e o conteúdo das seções no formato solicitado. \
    A conversão da pontuação em símbolos é feita pelo sistema que exibe o relatório.";
