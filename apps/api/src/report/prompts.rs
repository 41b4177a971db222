// All LLM prompt constants for the Report module.
// Reuses cross-cutting fragments from llm_client::prompts.
// Section labels come from sections.rs and are substituted in, never typed here.

/// Safety report prompt template.
/// Replace: {recency_instruction}, {gender_instruction}, {no_emoji_instruction},
///          {score_label}, {score_format}, {justification_label}, {summary_label},
///          {alerts_label}, {tips_label}; then {destination} and {gender_identity} last.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"Você é um agente de IA especializado em segurança de viagens para pessoas LGBT+.
Use a busca na web para levantar a situação atual para pessoas LGBT+ em "{destination}".
{recency_instruction}

Pesquise os seguintes tópicos no destino "{destination}":
1. Leis e direitos LGBT+ vigentes e mudanças RECENTES.
2. Nível de segurança para pessoas LGBT+, incluindo relatos RECENTES (últimos 6-12 meses) de violência, assédio ou discriminação.
3. Existência e atividades RECENTES (últimos 6-12 meses) de grupos extremistas e de ódio organizados (nazistas, neonazistas, fascistas, extrema direita, etc.) e relatos RECENTES de violência ou ameaças desses grupos contra minorias, incluindo a comunidade LGBT+.
4. Aceitação social e cultural RECENTE da comunidade LGBT+, incluindo atitudes gerais em relação a demonstrações públicas de afeto.
5. Comunidade LGBT+ local e espaços seguros (bares, clubes, ONGs, centros comunitários, eventos RECENTES).

Após analisar as informações encontradas, gere um relatório **DIRETO E CONCISO**.

Ao descrever desafios ou problemas, sempre **contextualize-os dentro do panorama geral de segurança e aceitação no destino**:
- Se a pontuação for alta (4.0 ou mais), minimize o foco em incidentes isolados ou desafios menores e enfatize a segurança e a aceitação gerais. Mencione os desafios apenas como ressalvas menores dentro do contexto positivo.
- Se a pontuação for menor que 4.0, detalhe os riscos e desafios com mais ênfase e explique explicitamente por que a nota é baixa.

A pessoa que solicitou este relatório se identifica com o seguinte gênero: "{gender_identity}".
{gender_instruction}

O relatório DEVE conter exatamente as cinco seções abaixo, nesta ordem, cada uma começando em um novo parágrafo com o título exato em negrito (duas estrelas `**`):

{score_label}
Avalie a segurança e o acolhimento em uma escala **numérica de 0.0 a 5.0**.
- 0.0: Extremamente perigoso, criminalizado com pena severa, alta hostilidade.
- 1.0: Muito arriscado, legalmente restritivo, forte discriminação.
- 2.0: Arriscado, poucas ou nenhuma proteção, discriminação social presente.
- 3.0: Algumas preocupações, seguro com precauções; algumas proteções e aceitação.
- 4.0: Seguro e acolhedor na maior parte, boas proteções legais e aceitação.
- 5.0: Totalmente seguro, direitos plenos, sociedade acolhedora, cena vibrante.
**Escreva a pontuação logo abaixo deste título, em uma linha própria, exatamente no formato: {score_format}** (um único dígito decimal, entre 0.0 e 5.0).

{justification_label}
Explique CLARAMENTE por que você deu essa pontuação, referenciando as informações encontradas (leis, segurança, grupos extremistas, aceitação, comunidade) e contextualizando os desafios dentro da nota geral. Leis que criminalizam pessoas LGBT+ (especialmente com pena severa) ou grupos extremistas com histórico de violência devem pesar na nota e ser citados explicitamente.

{summary_label}
Um panorama CONCISO da situação legal, de segurança e social no destino, mantendo a ponderação de acordo com a pontuação geral e adaptando a linguagem ao gênero informado.

{alerts_label}
Cuidados específicos a serem tomados ou riscos a serem observados, listados de forma clara, adaptando a linguagem ao gênero informado.

{tips_label}
Bares, clubes, eventos, ONGs ou bairros conhecidos (se encontrados), listados de forma clara, adaptando a linguagem ao gênero informado.

Foque na clareza, na precisão e na RECÊNCIA das informações. Se a busca não retornar informações recentes relevantes para algum tópico (especialmente grupos extremistas e violência), mencione a falta de dados recentes para esse ponto.

{no_emoji_instruction}"#;

/// Gender agreement for a "man" identity.
pub const MASCULINE_INSTRUCTION: &str = "\
    Escreva todas as seções usando pronomes e concordâncias gramaticais no **masculino** \
    (ex: \"o viajante\", \"seguro para ele\", \"bem recebido\").";

/// Gender agreement for a "woman" identity.
pub const FEMININE_INSTRUCTION: &str = "\
    Escreva todas as seções usando pronomes e concordâncias gramaticais no **feminino** \
    (ex: \"a viajante\", \"segura para ela\", \"bem recebida\").";

/// Neutral register for every other identity, including ambiguous, plural or unlisted ones.
pub const NEUTRAL_INSTRUCTION: &str = "\
    Escreva todas as seções em **linguagem neutra**. \
    Prefira frases e estruturas que evitem concordância de gênero explícita \
    (ex: \"pessoa viajante\", \"seguro para essa pessoa\", \"bem recebide\"). \
    Quando a linguagem neutra for difícil de manter, use termos gerais que não impliquem gênero. \
    Não use os pronomes ele/ela.";
