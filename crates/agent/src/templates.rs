//! Localized fixed texts: welcome, introductions, confirmations, apologies,
//! and the canned replies used when generation is unavailable.

use frontdesk_core::{Agent, Language};

/// Used when no agent-specific fallback exists.
pub const GENERIC_FALLBACK: &str = "I'm here to help. Could you please rephrase your question?";

/// Canned prompts offered to the guest as one-tap shortcuts.
pub const QUICK_ACTIONS: [&str; 4] = [
    "I want to schedule a room",
    "Check availability",
    "What are the room types?",
    "What are your prices?",
];

pub fn quick_actions() -> &'static [&'static str] {
    &QUICK_ACTIONS
}

/// The host's opening message for a new session.
pub fn welcome(language: Language, hotel_name: &str) -> String {
    match language {
        Language::En => format!(
            "Hello! Welcome to {hotel_name}. I'm Sarah, your host assistant. I can help with general information, facilities, and directions. For bookings, Daisy is here to assist. For support, John is ready to help. How may I assist you today?"
        ),
        Language::Tl => format!(
            "Kumusta! Maligayang pagdating sa {hotel_name}. Ako si Sarah, ang inyong host assistant. Makakatulong ako sa pangkalahatang impormasyon, mga pasilidad, at direksyon. Para sa booking, nandito si Daisy. Para sa support, handang tumulong si John. Paano kita matutulungan ngayon?"
        ),
        Language::Zh => format!(
            "您好！欢迎来到{hotel_name}。我是莎拉，您的接待助理。我可以为您提供一般信息、设施和路线方面的帮助。预订请找黛西，客户支持请找约翰。今天我能为您做些什么？"
        ),
        Language::Ja => format!(
            "こんにちは！{hotel_name}へようこそ。ホストアシスタントのサラです。一般情報、施設、道案内についてお手伝いします。ご予約はデイジー、サポートはジョンが担当します。本日はどのようなご用件でしょうか？"
        ),
        Language::Ko => format!(
            "안녕하세요! {hotel_name}에 오신 것을 환영합니다. 저는 호스트 도우미 사라입니다. 일반 정보, 시설, 길 안내를 도와드립니다. 예약은 데이지가, 지원은 존이 도와드립니다. 오늘 무엇을 도와드릴까요?"
        ),
    }
}

/// An agent's self-introduction on first explicit switch.
pub fn introduction(agent: Agent, language: Language) -> String {
    let p = agent.profile();
    let (name, role, focus) = (p.name, p.role, p.responsibilities);
    match language {
        Language::En => format!(
            "Hi! I'm {name}, your {role}. I specialize in {focus}. How can I help you?"
        ),
        Language::Tl => format!(
            "Kumusta! Ako si {name}, ang inyong {role}. Espesyalidad ko ang {focus}. Paano kita matutulungan?"
        ),
        Language::Zh => format!("您好！我是{name}，您的{role}。我擅长{focus}。有什么可以帮您？"),
        Language::Ja => format!(
            "こんにちは！{role}の{name}です。{focus}を担当しています。何をお手伝いできますか？"
        ),
        Language::Ko => format!(
            "안녕하세요! 저는 {role} {name}입니다. {focus}을(를) 전문으로 합니다. 무엇을 도와드릴까요?"
        ),
    }
}

/// Spoken after the guest picks a new language.
pub fn language_confirmation(language: Language) -> &'static str {
    match language {
        Language::En => "Language changed to English. How can I help you?",
        Language::Tl => "Pinalitan ang wika sa Tagalog. Paano kita matutulungan?",
        Language::Zh => "语言已切换为中文。有什么可以帮您？",
        Language::Ja => "言語を日本語に変更しました。何をお手伝いできますか？",
        Language::Ko => "언어가 한국어로 변경되었습니다. 무엇을 도와드릴까요?",
    }
}

/// Shown when a reply could not be produced or spoken.
pub fn apology(language: Language) -> &'static str {
    match language {
        Language::En => "I apologize for the inconvenience. Could you please try again?",
        Language::Tl => "Paumanhin po sa abala. Maaari po bang subukan ulit?",
        Language::Zh => "很抱歉给您带来不便。请您再试一次好吗？",
        Language::Ja => "ご不便をおかけして申し訳ございません。もう一度お試しいただけますか？",
        Language::Ko => "불편을 드려 죄송합니다. 다시 시도해 주시겠습니까?",
    }
}

/// Deterministic stand-in for a generated reply.
///
/// Echoes the guest's text and restates what the agent handles.
pub fn fallback_reply(agent: Agent, language: Language, text: &str) -> String {
    match (agent, language) {
        (Agent::Host, Language::En) => format!(
            "I understand you're asking about \"{text}\". As your host assistant, I'm here to help with general information and hotel facilities. Could you please provide more details?"
        ),
        (Agent::Host, Language::Tl) => format!(
            "Naiintindihan ko na nagtatanong ka tungkol sa \"{text}\". Bilang inyong host assistant, nandito ako para tumulong sa pangkalahatang impormasyon at mga pasilidad ng hotel. Maaari mo bang bigyan ng mas maraming detalye?"
        ),
        (Agent::Host, Language::Zh) => format!(
            "我理解您在询问\"{text}\"。作为您的接待助理，我在这里帮助您了解一般信息和酒店设施。您能提供更多细节吗？"
        ),
        (Agent::Host, Language::Ja) => format!(
            "\"{text}\"についてお尋ねですね。ホストアシスタントとして、一般情報とホテル施設についてお手伝いします。もう少し詳しく教えていただけますか？"
        ),
        (Agent::Host, Language::Ko) => format!(
            "\"{text}\"에 대해 문의하시는 것으로 이해합니다. 호스트 도우미로서 일반 정보와 호텔 시설에 대해 도와드립니다. 더 자세히 알려주시겠습니까?"
        ),
        (Agent::Concierge, Language::En) => format!(
            "Thank you for your inquiry about \"{text}\". As your booking specialist, I can help with reservations, pricing, and availability. What specific information do you need?"
        ),
        (Agent::Concierge, Language::Tl) => format!(
            "Salamat sa inyong tanong tungkol sa \"{text}\". Bilang inyong booking specialist, makakatulong ako sa mga reservation, presyo, at availability. Anong tukoy na impormasyon ang kailangan ninyo?"
        ),
        (Agent::Concierge, Language::Zh) => format!(
            "感谢您询问\"{text}\"。作为您的预订专员，我可以帮助您预订、定价和可用性。您需要什么具体信息？"
        ),
        (Agent::Concierge, Language::Ja) => format!(
            "\"{text}\"についてのお問い合わせありがとうございます。予約スペシャリストとして、予約、料金、空室状況についてお手伝いできます。どのような具体的な情報が必要ですか？"
        ),
        (Agent::Concierge, Language::Ko) => format!(
            "\"{text}\"에 대한 문의 감사합니다. 예약 전문가로서 예약, 가격 및 예약 가능 여부를 도와드릴 수 있습니다. 어떤 구체적인 정보가 필요하신가요?"
        ),
        (Agent::Support, Language::En) => format!(
            "I'm here to help with \"{text}\". As your support manager, I handle operational issues and assistance. Please let me know the details so I can help you right away."
        ),
        (Agent::Support, Language::Tl) => format!(
            "Nandito ako para tumulong sa \"{text}\". Bilang inyong support manager, hinahawakan ko ang mga operational issues at tulong. Pakisabi sa akin ang mga detalye para matulungan kita kaagad."
        ),
        (Agent::Support, Language::Zh) => format!(
            "我在这里帮助您处理\"{text}\"。作为您的支持经理，我处理运营问题和协助。请让我知道详情，以便我立即帮助您。"
        ),
        (Agent::Support, Language::Ja) => format!(
            "\"{text}\"についてお手伝いします。サポートマネージャーとして、運営上の問題や支援を担当しています。詳細を教えていただければ、すぐにお手伝いいたします。"
        ),
        (Agent::Support, Language::Ko) => format!(
            "\"{text}\"을(를) 도와드리겠습니다. 지원 관리자로서 운영 문제와 지원을 처리합니다. 즉시 도와드릴 수 있도록 세부 사항을 알려주세요."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_names_the_hotel_and_all_agents() {
        let text = welcome(Language::En, "Hotel Rafaela");
        assert!(text.starts_with("Hello! Welcome to Hotel Rafaela. I'm Sarah"));
        assert!(text.contains("Daisy") && text.contains("John"));
    }

    #[test]
    fn introduction_uses_profile() {
        assert_eq!(
            introduction(Agent::Concierge, Language::En),
            "Hi! I'm Daisy, your Booking Specialist. I specialize in Scheduling & Payments. How can I help you?"
        );
    }

    #[test]
    fn fallback_echoes_text_in_every_language() {
        for agent in Agent::ALL {
            for language in Language::ALL {
                assert!(fallback_reply(agent, language, "late dinner").contains("late dinner"));
            }
        }
    }

    #[test]
    fn localized_texts_differ_per_language() {
        let apologies: std::collections::HashSet<_> = Language::ALL.iter().map(|l| apology(*l)).collect();
        assert_eq!(apologies.len(), Language::ALL.len());
        assert_eq!(language_confirmation(Language::Ja), "言語を日本語に変更しました。何をお手伝いできますか？");
    }

    #[test]
    fn four_quick_actions() {
        assert_eq!(quick_actions().len(), 4);
        assert_eq!(quick_actions()[0], "I want to schedule a room");
    }
}
