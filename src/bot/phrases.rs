//! Static multilingual phrase table for the assistant.
//!
//! Keywords are matched against lowercased input. English keywords are
//! listed separately because they are honoured for every language.

use super::Topic;
use crate::types::Language;

pub(super) fn english_keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Emergency => &["emergency"],
        Topic::Ambulance => &["ambulance"],
        Topic::Hospital => &["hospital"],
        Topic::ChestPain => &["chest pain"],
        Topic::Stroke => &["stroke"],
        Topic::Bleeding => &["bleeding"],
        Topic::HeartAttack => &["heartattack", "heart attack"],
        Topic::Accident => &["accident"],
        Topic::Help => &["help"],
        Topic::Location => &["location"],
        Topic::Capabilities => &["what can you do", "help me"],
        Topic::Thanks => &["thank"],
        Topic::Greeting => &["hello", "hi"],
        Topic::Fallback => &[],
    }
}

pub(super) fn native_keywords(topic: Topic, language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[],
        Language::Hindi => match topic {
            Topic::Emergency => &["आपातकाल", "इमरजेंसी"],
            Topic::Ambulance => &["एम्बुलेंस", "एंबुलेंस"],
            Topic::Hospital => &["अस्पताल", "हॉस्पिटल"],
            Topic::ChestPain => &["सीने में दर्द", "छाती में दर्द"],
            Topic::Stroke => &["लकवा", "स्ट्रोक"],
            Topic::Bleeding => &["खून", "रक्तस्राव"],
            Topic::HeartAttack => &["दिल का दौरा", "हार्ट अटैक"],
            Topic::Accident => &["दुर्घटना", "एक्सीडेंट"],
            Topic::Help => &["मदद", "सहायता"],
            Topic::Location => &["स्थान", "लोकेशन"],
            Topic::Capabilities => &["क्या कर सकते"],
            Topic::Thanks => &["धन्यवाद", "शुक्रिया"],
            Topic::Greeting => &["नमस्ते", "नमस्कार"],
            Topic::Fallback => &[],
        },
        Language::Marathi => match topic {
            Topic::Emergency => &["आणीबाणी", "इमर्जन्सी"],
            Topic::Ambulance => &["रुग्णवाहिका", "अॅम्ब्युलन्स"],
            Topic::Hospital => &["रुग्णालय", "दवाखाना", "हॉस्पिटल"],
            Topic::ChestPain => &["छातीत दुख"],
            Topic::Stroke => &["पक्षाघात", "स्ट्रोक"],
            Topic::Bleeding => &["रक्तस्त्राव", "रक्त"],
            Topic::HeartAttack => &["हृदयविकाराचा झटका", "हार्ट अटॅक"],
            Topic::Accident => &["अपघात"],
            Topic::Help => &["मदत"],
            Topic::Location => &["ठिकाण", "लोकेशन"],
            Topic::Capabilities => &["काय करू शकता"],
            Topic::Thanks => &["धन्यवाद", "आभार"],
            Topic::Greeting => &["नमस्कार", "नमस्ते"],
            Topic::Fallback => &[],
        },
        Language::Gujarati => match topic {
            Topic::Emergency => &["કટોકટી", "ઇમરજન્સી"],
            Topic::Ambulance => &["એમ્બ્યુલન્સ"],
            Topic::Hospital => &["હોસ્પિટલ", "દવાખાન"],
            Topic::ChestPain => &["છાતીમાં દુખાવો", "છાતીમાં દર્દ"],
            Topic::Stroke => &["લકવો", "સ્ટ્રોક"],
            Topic::Bleeding => &["રક્તસ્ત્રાવ", "લોહી"],
            Topic::HeartAttack => &["હાર્ટ એટેક", "હૃદયરોગનો હુમલો"],
            Topic::Accident => &["અકસ્માત"],
            Topic::Help => &["મદદ"],
            Topic::Location => &["સ્થાન", "લોકેશન"],
            Topic::Capabilities => &["શું કરી શકો"],
            Topic::Thanks => &["આભાર", "ધન્યવાદ"],
            Topic::Greeting => &["નમસ્તે", "નમસ્કાર", "કેમ છો"],
            Topic::Fallback => &[],
        },
    }
}

pub(super) fn welcome(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Hello! I'm AnswerGenie, your medical assistant. How can I help you today?"
        }
        Language::Hindi => {
            "नमस्ते! मैं AnswerGenie हूँ, आपका चिकित्सा सहायक। आज मैं आपकी क्या मदद कर सकता हूँ?"
        }
        Language::Marathi => {
            "नमस्कार! मी AnswerGenie, तुमचा वैद्यकीय सहाय्यक आहे. आज मी तुमची कशी मदत करू शकतो?"
        }
        Language::Gujarati => {
            "નમસ્તે! હું AnswerGenie છું, તમારો તબીબી સહાયક. આજે હું તમારી કેવી રીતે મદદ કરી શકું?"
        }
    }
}

pub(super) fn reply(topic: Topic, language: Language) -> &'static str {
    match language {
        Language::English => english_reply(topic),
        Language::Hindi => hindi_reply(topic),
        Language::Marathi => marathi_reply(topic),
        Language::Gujarati => gujarati_reply(topic),
    }
}

fn english_reply(topic: Topic) -> &'static str {
    match topic {
        Topic::Emergency => {
            "To request emergency services, please press the red EMERGENCY button on the main screen. This will immediately alert our system to send help to your location."
        }
        Topic::Ambulance => {
            "Need an ambulance? Press the red EMERGENCY button on the home page. Our system will dispatch the nearest available ambulance to your location."
        }
        Topic::Hospital => {
            "Looking for hospital information? You can click on 'Find Hospitals' in the navigation bar to see nearby medical facilities."
        }
        Topic::ChestPain => {
            "Chest pain could be serious. Please press the EMERGENCY button immediately. While waiting: 1) Sit down and rest 2) Take aspirin if available and not allergic 3) Loosen tight clothing."
        }
        Topic::Stroke => {
            "If you suspect a stroke, remember FAST: Face drooping, Arm weakness, Speech difficulty, Time to call emergency services. Press the EMERGENCY button now."
        }
        Topic::Bleeding => {
            "For severe bleeding: 1) Apply direct pressure to the wound 2) Use a clean cloth if possible 3) Press the EMERGENCY button immediately for professional help."
        }
        Topic::HeartAttack => {
            "If experiencing heart attack symptoms, press the EMERGENCY button now. Sit or lie down, loosen tight clothing, and try to stay calm until help arrives."
        }
        Topic::Accident => {
            "For accident emergencies, press the EMERGENCY button immediately. If safe to do so, try not to move injured persons until professional help arrives."
        }
        Topic::Help => {
            "For medical emergencies, press the red EMERGENCY button on the main screen. For information about hospitals, click on 'Find Hospitals' in the navigation menu."
        }
        Topic::Location => {
            "I can see your current location is being tracked on the map. This helps us send emergency services to you precisely when needed."
        }
        Topic::Capabilities => {
            "I can assist with medical information, guide you through emergency procedures, or help you find hospitals. For immediate medical assistance, please press the red EMERGENCY button."
        }
        Topic::Thanks => {
            "You're welcome! I'm here to help with any medical questions or emergencies."
        }
        Topic::Greeting => {
            "Hello! I'm here to assist you with medical information and emergency guidance. How can I help you today?"
        }
        Topic::Fallback => {
            "I understand you need assistance. For immediate medical emergencies, please press the red EMERGENCY button. If you need information about hospitals or have medical questions, I'm here to help."
        }
    }
}

fn hindi_reply(topic: Topic) -> &'static str {
    match topic {
        Topic::Emergency => {
            "आपातकालीन सेवाओं के लिए, कृपया मुख्य स्क्रीन पर लाल EMERGENCY बटन दबाएँ। इससे हमारी प्रणाली तुरंत आपके स्थान पर मदद भेजेगी।"
        }
        Topic::Ambulance => {
            "एम्बुलेंस चाहिए? होम पेज पर लाल EMERGENCY बटन दबाएँ। हमारी प्रणाली निकटतम उपलब्ध एम्बुलेंस आपके स्थान पर भेजेगी।"
        }
        Topic::Hospital => {
            "अस्पताल की जानकारी चाहिए? आस-पास की चिकित्सा सुविधाएँ देखने के लिए नेविगेशन बार में 'Find Hospitals' पर क्लिक करें।"
        }
        Topic::ChestPain => {
            "सीने में दर्द गंभीर हो सकता है। कृपया तुरंत EMERGENCY बटन दबाएँ। प्रतीक्षा करते समय: 1) बैठकर आराम करें 2) एलर्जी न हो तो एस्पिरिन लें 3) तंग कपड़े ढीले करें।"
        }
        Topic::Stroke => {
            "अगर आपको लकवे (स्ट्रोक) का संदेह है, तो FAST याद रखें: चेहरा लटकना, बाँह में कमजोरी, बोलने में कठिनाई, तुरंत आपातकालीन सेवा बुलाएँ। अभी EMERGENCY बटन दबाएँ।"
        }
        Topic::Bleeding => {
            "अधिक खून बहने पर: 1) घाव पर सीधा दबाव डालें 2) हो सके तो साफ कपड़ा इस्तेमाल करें 3) पेशेवर मदद के लिए तुरंत EMERGENCY बटन दबाएँ।"
        }
        Topic::HeartAttack => {
            "दिल के दौरे के लक्षण हों तो अभी EMERGENCY बटन दबाएँ। बैठ जाएँ या लेट जाएँ, तंग कपड़े ढीले करें और मदद आने तक शांत रहने की कोशिश करें।"
        }
        Topic::Accident => {
            "दुर्घटना की स्थिति में तुरंत EMERGENCY बटन दबाएँ। सुरक्षित हो तो पेशेवर मदद आने तक घायल व्यक्ति को न हिलाएँ।"
        }
        Topic::Help => {
            "चिकित्सा आपातकाल के लिए मुख्य स्क्रीन पर लाल EMERGENCY बटन दबाएँ। अस्पतालों की जानकारी के लिए नेविगेशन मेनू में 'Find Hospitals' पर क्लिक करें।"
        }
        Topic::Location => {
            "मैं देख सकता हूँ कि आपका वर्तमान स्थान मानचित्र पर ट्रैक किया जा रहा है। इससे ज़रूरत पड़ने पर आपातकालीन सेवाएँ सही जगह पहुँचती हैं।"
        }
        Topic::Capabilities => {
            "मैं चिकित्सा जानकारी दे सकता हूँ, आपातकालीन प्रक्रियाओं में मार्गदर्शन कर सकता हूँ, या अस्पताल खोजने में मदद कर सकता हूँ। तुरंत सहायता के लिए लाल EMERGENCY बटन दबाएँ।"
        }
        Topic::Thanks => {
            "आपका स्वागत है! मैं किसी भी चिकित्सा प्रश्न या आपातकाल में मदद के लिए यहाँ हूँ।"
        }
        Topic::Greeting => {
            "नमस्ते! मैं चिकित्सा जानकारी और आपातकालीन मार्गदर्शन के लिए यहाँ हूँ। आज मैं आपकी क्या मदद कर सकता हूँ?"
        }
        Topic::Fallback => {
            "मैं समझता हूँ कि आपको सहायता चाहिए। तुरंत चिकित्सा आपातकाल के लिए लाल EMERGENCY बटन दबाएँ। अस्पतालों की जानकारी या चिकित्सा प्रश्नों के लिए मैं यहाँ हूँ।"
        }
    }
}

fn marathi_reply(topic: Topic) -> &'static str {
    match topic {
        Topic::Emergency => {
            "आपत्कालीन सेवांसाठी, कृपया मुख्य स्क्रीनवरील लाल EMERGENCY बटण दाबा. आमची प्रणाली लगेच तुमच्या ठिकाणी मदत पाठवेल."
        }
        Topic::Ambulance => {
            "रुग्णवाहिका हवी आहे? होम पेजवरील लाल EMERGENCY बटण दाबा. आमची प्रणाली जवळची उपलब्ध रुग्णवाहिका तुमच्या ठिकाणी पाठवेल."
        }
        Topic::Hospital => {
            "रुग्णालयाची माहिती हवी आहे? जवळच्या वैद्यकीय सुविधा पाहण्यासाठी नेव्हिगेशन बारमधील 'Find Hospitals' वर क्लिक करा."
        }
        Topic::ChestPain => {
            "छातीत दुखणे गंभीर असू शकते. कृपया लगेच EMERGENCY बटण दाबा. वाट पाहताना: 1) बसून विश्रांती घ्या 2) ॲलर्जी नसल्यास ॲस्पिरिन घ्या 3) घट्ट कपडे सैल करा."
        }
        Topic::Stroke => {
            "पक्षाघाताचा संशय असल्यास FAST लक्षात ठेवा: चेहरा वाकडा होणे, हात कमजोर होणे, बोलण्यात अडचण, लगेच आपत्कालीन सेवा बोलवा. आता EMERGENCY बटण दाबा."
        }
        Topic::Bleeding => {
            "जास्त रक्तस्त्राव होत असल्यास: 1) जखमेवर थेट दाब द्या 2) शक्य असल्यास स्वच्छ कापड वापरा 3) व्यावसायिक मदतीसाठी लगेच EMERGENCY बटण दाबा."
        }
        Topic::HeartAttack => {
            "हृदयविकाराच्या झटक्याची लक्षणे असल्यास आता EMERGENCY बटण दाबा. बसा किंवा झोपा, घट्ट कपडे सैल करा आणि मदत येईपर्यंत शांत राहण्याचा प्रयत्न करा."
        }
        Topic::Accident => {
            "अपघाताच्या वेळी लगेच EMERGENCY बटण दाबा. सुरक्षित असल्यास व्यावसायिक मदत येईपर्यंत जखमी व्यक्तीला हलवू नका."
        }
        Topic::Help => {
            "वैद्यकीय आणीबाणीसाठी मुख्य स्क्रीनवरील लाल EMERGENCY बटण दाबा. रुग्णालयांच्या माहितीसाठी नेव्हिगेशन मेनूमधील 'Find Hospitals' वर क्लिक करा."
        }
        Topic::Location => {
            "तुमचे सध्याचे ठिकाण नकाशावर ट्रॅक होत आहे. त्यामुळे गरज पडल्यास आपत्कालीन सेवा अचूक ठिकाणी पोहोचतात."
        }
        Topic::Capabilities => {
            "मी वैद्यकीय माहिती देऊ शकतो, आपत्कालीन प्रक्रियेत मार्गदर्शन करू शकतो किंवा रुग्णालये शोधण्यात मदत करू शकतो. तात्काळ मदतीसाठी लाल EMERGENCY बटण दाबा."
        }
        Topic::Thanks => {
            "तुमचे स्वागत आहे! कोणत्याही वैद्यकीय प्रश्नासाठी किंवा आणीबाणीसाठी मी येथे आहे."
        }
        Topic::Greeting => {
            "नमस्कार! वैद्यकीय माहिती आणि आपत्कालीन मार्गदर्शनासाठी मी येथे आहे. आज मी तुमची कशी मदत करू?"
        }
        Topic::Fallback => {
            "तुम्हाला मदत हवी आहे हे मला समजते. तात्काळ वैद्यकीय आणीबाणीसाठी लाल EMERGENCY बटण दाबा. रुग्णालयांची माहिती किंवा वैद्यकीय प्रश्नांसाठी मी येथे आहे."
        }
    }
}

fn gujarati_reply(topic: Topic) -> &'static str {
    match topic {
        Topic::Emergency => {
            "કટોકટી સેવાઓ માટે, કૃપા કરીને મુખ્ય સ્ક્રીન પરનું લાલ EMERGENCY બટન દબાવો. અમારી સિસ્ટમ તરત જ તમારા સ્થાન પર મદદ મોકલશે."
        }
        Topic::Ambulance => {
            "એમ્બ્યુલન્સ જોઈએ છે? હોમ પેજ પરનું લાલ EMERGENCY બટન દબાવો. અમારી સિસ્ટમ સૌથી નજીકની ઉપલબ્ધ એમ્બ્યુલન્સ તમારા સ્થાન પર મોકલશે."
        }
        Topic::Hospital => {
            "હોસ્પિટલની માહિતી જોઈએ છે? નજીકની તબીબી સુવિધાઓ જોવા માટે નેવિગેશન બારમાં 'Find Hospitals' પર ક્લિક કરો."
        }
        Topic::ChestPain => {
            "છાતીમાં દુખાવો ગંભીર હોઈ શકે છે. કૃપા કરીને તરત જ EMERGENCY બટન દબાવો. રાહ જોતી વખતે: 1) બેસીને આરામ કરો 2) એલર્જી ન હોય તો એસ્પિરિન લો 3) ચુસ્ત કપડાં ઢીલા કરો."
        }
        Topic::Stroke => {
            "જો તમને લકવાની શંકા હોય તો FAST યાદ રાખો: ચહેરો નમી જવો, હાથમાં નબળાઈ, બોલવામાં તકલીફ, તરત કટોકટી સેવા બોલાવો. હમણાં જ EMERGENCY બટન દબાવો."
        }
        Topic::Bleeding => {
            "વધુ રક્તસ્ત્રાવ માટે: 1) ઘા પર સીધું દબાણ આપો 2) શક્ય હોય તો સ્વચ્છ કપડું વાપરો 3) વ્યાવસાયિક મદદ માટે તરત જ EMERGENCY બટન દબાવો."
        }
        Topic::HeartAttack => {
            "હાર્ટ એટેકના લક્ષણો હોય તો હમણાં જ EMERGENCY બટન દબાવો. બેસી જાઓ અથવા સૂઈ જાઓ, ચુસ્ત કપડાં ઢીલા કરો અને મદદ આવે ત્યાં સુધી શાંત રહેવાનો પ્રયાસ કરો."
        }
        Topic::Accident => {
            "અકસ્માતની સ્થિતિમાં તરત જ EMERGENCY બટન દબાવો. સુરક્ષિત હોય તો વ્યાવસાયિક મદદ આવે ત્યાં સુધી ઘાયલ વ્યક્તિને ખસેડશો નહીં."
        }
        Topic::Help => {
            "તબીબી કટોકટી માટે મુખ્ય સ્ક્રીન પરનું લાલ EMERGENCY બટન દબાવો. હોસ્પિટલોની માહિતી માટે નેવિગેશન મેનૂમાં 'Find Hospitals' પર ક્લિક કરો."
        }
        Topic::Location => {
            "તમારું વર્તમાન સ્થાન નકશા પર ટ્રેક થઈ રહ્યું છે. તેનાથી જરૂર પડ્યે કટોકટી સેવાઓ ચોક્કસ સ્થાને પહોંચી શકે છે."
        }
        Topic::Capabilities => {
            "હું તબીબી માહિતી આપી શકું છું, કટોકટી પ્રક્રિયામાં માર્ગદર્શન આપી શકું છું અથવા હોસ્પિટલ શોધવામાં મદદ કરી શકું છું. તાત્કાલિક મદદ માટે લાલ EMERGENCY બટન દબાવો."
        }
        Topic::Thanks => {
            "તમારું સ્વાગત છે! કોઈપણ તબીબી પ્રશ્ન કે કટોકટીમાં મદદ માટે હું અહીં છું."
        }
        Topic::Greeting => {
            "નમસ્તે! તબીબી માહિતી અને કટોકટી માર્ગદર્શન માટે હું અહીં છું. આજે હું તમારી કેવી રીતે મદદ કરી શકું?"
        }
        Topic::Fallback => {
            "હું સમજું છું કે તમને મદદની જરૂર છે. તાત્કાલિક તબીબી કટોકટી માટે લાલ EMERGENCY બટન દબાવો. હોસ્પિટલોની માહિતી કે તબીબી પ્રશ્નો માટે હું અહીં છું."
        }
    }
}
