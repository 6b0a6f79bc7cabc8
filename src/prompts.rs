//! Prompt templates for the OpenAI-backed routes
//!
//! All prompts target the Japanese market, matching the product copy.

/// System prompt for the free-form chat product
pub const CHAT_SYSTEM: &str = "あなたは親切で知識豊富なAIアシスタントです。日本語で自然な会話を行い、ユーザーの質問に正確で有用な回答を提供してください。";

/// System prompt for persona generation
pub const PERSONA_SYSTEM: &str = "あなたは日本市場のマーケティング専門家です。与えられた商品情報から、実用的で現実的なペルソナを3つ生成してください。出力は必ずJSON形式で、構文エラーがないようにしてください。";

/// System prompt for marketing strategy generation
pub const MARKETING_SYSTEM: &str = "あなたは日本市場に精通したマーケティング専門家です。実用的で具体的なマーケティング施策を提案してください。出力は必ずJSON形式で、構文エラーがないようにしてください。";

/// System prompt for the smart place-search query rewriter
pub const SMART_SEARCH_SYSTEM: &str = r#"あなたは場所検索の専門家です。ユーザーの曖昧な要求を、Google Places APIで検索しやすい具体的なクエリに変換してください。

以下の例を参考にしてください：
- "デートにおすすめの場所" → "レストラン カフェ 公園"
- "友達と遊べる場所" → "カラオケ ゲームセンター ボウリング場"
- "一人で勉強できる場所" → "カフェ 図書館 コワーキングスペース"
- "子供と楽しめる場所" → "公園 遊園地 動物園 ファミリーレストラン"
- "美味しい食事" → "評判の良いレストラン"
- "おしゃれな場所" → "インスタ映え カフェ ショップ"
- "安くて美味しい" → "コスパの良い 定食 ラーメン 居酒屋"

レスポンスは以下のJSON形式で返してください：
{
  "optimizedQuery": "最適化された検索クエリ",
  "explanation": "なぜこのクエリに変換したかの簡単な説明",
  "searchTips": "検索のコツやアドバイス"
}"#;

/// Example output embedded in the persona prompt so the model copies the exact shape
const PERSONA_JSON_EXAMPLE: &str = r#"{
  "Persona A": {
    "name": "田中 明子",
    "age": 28,
    "gender": "女性",
    "occupation": "会社員（マーケティング職）",
    "location": "東京都渋谷区",
    "family_status": "独身",
    "income": "年収450万円",
    "lifestyle": "平日は忙しく働き、週末は友人との時間を大切にする。健康志向で新しいサービスに興味がある",
    "technology_level": "高い（新しいアプリやサービスを積極的に試す）",
    "values": "効率性、自己投資、健康管理",
    "shopping_behavior": "オンラインショッピング中心、口コミを重視、InstagramやTwitterで情報収集",
    "pain_points": "忙しくて時間がない、継続するのが苦手",
    "motivation": "自分磨きと効率的な生活の実現",
    "preferred_channels": "Instagram、Twitter、オンライン広告"
  },
  "Persona B": {
    "name": "佐藤 健太",
    "age": 35,
    "gender": "男性",
    "occupation": "会社員（IT職）",
    "location": "神奈川県横浜市",
    "family_status": "既婚・子供1人",
    "income": "年収650万円",
    "lifestyle": "家族との時間を重視し、仕事とプライベートのバランスを大切にする。合理的な判断を好む",
    "technology_level": "非常に高い（ITプロフェッショナル）",
    "values": "家族、効率性、コストパフォーマンス",
    "shopping_behavior": "事前リサーチを徹底、価格比較サイトを活用、Amazon等のECサイト利用",
    "pain_points": "時間の制約、家計管理の必要性",
    "motivation": "家族のためのより良い生活環境の構築",
    "preferred_channels": "検索エンジン、比較サイト、技術系メディア"
  },
  "Persona C": {
    "name": "山田 美和子",
    "age": 45,
    "gender": "女性",
    "occupation": "主婦・パートタイム勤務",
    "location": "大阪府吹田市",
    "family_status": "既婚・子供2人（中学生・高校生）",
    "income": "世帯年収800万円（夫の収入含む）",
    "lifestyle": "家事と育児中心の生活。子供の教育費を考慮し、慎重な消費行動を取る",
    "technology_level": "中程度（必要な機能は使えるが、新しい技術には慎重）",
    "values": "家族の健康と安全、節約、実用性",
    "shopping_behavior": "実店舗とオンラインを併用、クーポンや割引を重視、口コミサイトで確認",
    "pain_points": "教育費の負担、家事の効率化の必要性",
    "motivation": "家族の健康管理と家計の節約",
    "preferred_channels": "LINE、Facebook、店舗での紹介、テレビCM"
  }
}"#;

/// Example output embedded in the marketing strategy prompt
const MARKETING_JSON_EXAMPLE: &str = r#"{
  "Persona A": {
    "target_name": "ペルソナ名",
    "ad_copies": [
      "キャッチコピー1",
      "キャッチコピー2",
      "キャッチコピー3"
    ],
    "channels": [
      {
        "name": "チャネル名",
        "priority": 1,
        "reason": "選択理由"
      }
    ],
    "timing": {
      "weekdays": "平日の最適時間帯",
      "weekends": "休日の最適時間帯",
      "reason": "タイミング選択の理由"
    },
    "expected_performance": {
      "click_rate": "予想クリック率（%）",
      "conversion_rate": "予想コンバージョン率（%）",
      "engagement_score": "エンゲージメント予想（1-10点）"
    },
    "action_plan": [
      "具体的なアクション1",
      "具体的なアクション2",
      "具体的なアクション3"
    ]
  },
  "Persona B": { ... },
  "Persona C": { ... }
}"#;

/// Build the persona generation prompt for a service
pub fn persona_prompt(service_name: &str, service_description: &str) -> String {
    format!(
        "以下は、与えられた商品情報（商品名・商品説明）から、日本市場向けに現実的で活用できる「3つのペルソナ（Persona A, B, C）」を生成するためのプロンプトです。\n\
         出力は必ずJSON形式で、各ペルソナは以下の構造を完全に満たしてください（空欄不可）。各ペルソナは年齢層・ライフスタイル・価値観で明確に差を付け、実用的で具体的な内容にしてください。\n\n\
         【必須入力】\n\
         商品名: {service_name}\n\
         商品説明: {service_description}\n\n\
         【要件】\n\
         1. Persona A/B/Cは日本国内の代表的な顧客像として現実味を持たせること。\n\
         2. 各ペルソナは互いに明確に差別化する（年齢、職業、家族構成、テクノロジー理解度、価格感度など）。\n\
         3. 各項目は具体的に記述（例：どのSNS、どのECサイト、典型的な購買理由など）。\n\
         4. 文化的背景は日本市場に合わせる（居住地は都道府県・市区町村レベルまたは例示でよい）。\n\
         5. JSONは構文エラーが無いこと（コメント不可）。すべてのフィールドを埋めること。\n\n\
         【出力JSONフォーマット例】\n\
         {example}\n\n\
         上記の形式に従って、{service_name}（{service_description}）に対する3つのペルソナをJSON形式で生成してください。JSONのみを出力し、説明文は含めないでください。",
        service_name = service_name,
        service_description = service_description,
        example = PERSONA_JSON_EXAMPLE,
    )
}

/// Build the marketing strategy prompt for a service and its personas
pub fn marketing_prompt(
    service_name: &str,
    service_description: &str,
    personas_json: &str,
) -> String {
    format!(
        "あなたは日本市場のマーケティング専門家です。以下のサービスとペルソナ情報を基に、各ペルソナに最適なマーケティング施策を提案してください。\n\n\
         【サービス情報】\n\
         サービス名: {service_name}\n\
         サービス概要: {service_description}\n\n\
         【ペルソナ情報】\n\
         {personas}\n\n\
         【要件】\n\
         各ペルソナ（Persona A, B, C）について、以下の項目を具体的に提案してください：\n\n\
         1. 広告キャッチコピー案（3-5個）- 各ペルソナの価値観と悩みに響くコピー\n\
         2. 最適な広告チャネル（優先順位付き）- SNS、検索広告、動画など\n\
         3. おすすめ配信時間帯 - ライフスタイルに合わせた時間\n\
         4. 想定エンゲージメント率 - クリック率、コンバージョン率の予測\n\
         5. 具体的なアクションプラン - 実行可能な3-5つのステップ\n\n\
         【出力形式】\n\
         以下のJSON形式で出力してください（コメント不可、構文エラー無し）：\n\n\
         {example}\n\n\
         日本市場の特性を考慮し、実用的で実行可能な提案をしてください。",
        service_name = service_name,
        service_description = service_description,
        personas = personas_json,
        example = MARKETING_JSON_EXAMPLE,
    )
}

/// Build the user message for the smart search query rewrite
pub fn smart_search_prompt(query: &str, location: Option<&str>) -> String {
    format!(
        "以下のユーザーの要求を、Google Places APIで検索しやすいクエリに変換してください：\n\n\
         ユーザーの要求: \"{query}\"\n\
         検索エリア: \"{location}\"",
        query = query,
        location = location.unwrap_or("指定なし"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_prompt_embeds_service_info() {
        let prompt = persona_prompt("テストサービス", "オンライン学習プラットフォーム");
        assert!(prompt.contains("商品名: テストサービス"));
        assert!(prompt.contains("商品説明: オンライン学習プラットフォーム"));
        assert!(prompt.contains("Persona A"));
    }

    #[test]
    fn marketing_prompt_embeds_personas() {
        let prompt = marketing_prompt("テスト", "説明", r#"{"Persona A": {}}"#);
        assert!(prompt.contains(r#"{"Persona A": {}}"#));
        assert!(prompt.contains("action_plan"));
    }

    #[test]
    fn smart_search_prompt_defaults_location() {
        let prompt = smart_search_prompt("デートにおすすめの場所", None);
        assert!(prompt.contains("検索エリア: \"指定なし\""));

        let prompt = smart_search_prompt("カフェ", Some("渋谷"));
        assert!(prompt.contains("検索エリア: \"渋谷\""));
    }
}
